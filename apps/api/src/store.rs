use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::models::job::{JobRecord, JOB_COLUMNS};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on job table: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error on job table: {0}")]
    Csv(#[from] csv::Error),
}

/// In-memory job table mirrored to a CSV file.
///
/// The file is read once at startup and fully rewritten after every mutation.
/// Rewrites go to a sibling `.tmp` file that is renamed over the table, so a
/// failed flush leaves the previous file intact.
#[derive(Debug)]
pub struct JobStore {
    path: PathBuf,
    records: Vec<JobRecord>,
    next_id: u64,
}

impl JobStore {
    /// Loads the table from `path`. A missing file yields an empty table.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let records = if path.exists() {
            read_records(&path)?
        } else {
            info!("No job table at {}, starting empty", path.display());
            Vec::new()
        };

        // len + 1 on a clean file; the max id guards against reuse after gaps.
        let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        let next_id = max_id.max(records.len() as u64) + 1;

        info!(
            "Loaded {} jobs from {} (next id {next_id})",
            records.len(),
            path.display()
        );

        Ok(JobStore {
            path,
            records,
            next_id,
        })
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The id the next successful insert will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Appends a record built from the next id and flushes.
    /// On a failed flush the record is dropped and the id is not consumed.
    pub fn insert_with(
        &mut self,
        build: impl FnOnce(u64) -> JobRecord,
    ) -> Result<JobRecord, StoreError> {
        let record = build(self.next_id);
        self.records.push(record.clone());

        if let Err(e) = self.flush() {
            self.records.pop();
            return Err(e);
        }

        self.next_id += 1;
        Ok(record)
    }

    /// Removes the record with `id` and flushes. Returns `Ok(None)` when no
    /// record has that id. On a failed flush the record is put back.
    pub fn remove(&mut self, id: u64) -> Result<Option<JobRecord>, StoreError> {
        let Some(pos) = self.records.iter().position(|r| r.id == id) else {
            return Ok(None);
        };
        let removed = self.records.remove(pos);

        if let Err(e) = self.flush() {
            self.records.insert(pos, removed);
            return Err(e);
        }

        Ok(Some(removed))
    }

    /// Rewrites the whole backing file. The header is written even when the
    /// table is empty.
    pub fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.tmp_path();
        if let Err(e) = self.write_table(&tmp_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!("Flushed {} jobs to {}", self.records.len(), self.path.display());
        Ok(())
    }

    fn write_table(&self, target: &Path) -> Result<(), StoreError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(target)?;
        writer.write_record(JOB_COLUMNS)?;
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

fn read_records(path: &Path) -> Result<Vec<JobRecord>, StoreError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}
