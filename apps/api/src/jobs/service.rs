use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::AppError;
use crate::models::job::{JobRecord, NewJob, SkillsRecommendation, TitleRecommendation};
use crate::recommend::ranker::{rank_by_skills, rank_by_title};
use crate::store::JobStore;

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;

/// Case-insensitive substring filters for listing. Empty strings match everything.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub employment_type: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
}

impl JobFilter {
    pub fn matches(&self, job: &JobRecord) -> bool {
        contains_ci(&job.employment_type, self.employment_type.as_deref())
            && contains_ci(&job.location, self.location.as_deref())
            && contains_ci(job.category.as_deref().unwrap_or(""), self.category.as_deref())
    }
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(n) if !n.is_empty() => haystack.to_lowercase().contains(&n.to_lowercase()),
        _ => true,
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

/// CRUD and recommendation operations over the job table.
///
/// Writers hold the lock across mutation and flush, so the file always
/// reflects a complete sequence of mutations.
pub struct JobService {
    store: RwLock<JobStore>,
    similarity_threshold: f64,
}

impl JobService {
    pub fn new(store: JobStore, similarity_threshold: f64) -> Self {
        JobService {
            store: RwLock::new(store),
            similarity_threshold,
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Filtered slice of the table in table order.
    pub async fn list(
        &self,
        filter: &JobFilter,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<JobRecord>, AppError> {
        if limit > MAX_LIMIT {
            return Err(AppError::Validation(format!(
                "limit must be at most {MAX_LIMIT}, got {limit}"
            )));
        }

        let store = self.store.read().await;
        Ok(store
            .records()
            .iter()
            .filter(|job| filter.matches(job))
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    pub async fn create(&self, candidate: NewJob) -> Result<JobRecord, AppError> {
        let missing = candidate.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "All job fields are required; missing: {}",
                missing.join(", ")
            )));
        }

        let mut store = self.store.write().await;
        let record = store.insert_with(|id| candidate.into_record(id))?;
        info!("Created job {} ({})", record.id, record.title);
        Ok(record)
    }

    pub async fn delete(&self, id: u64) -> Result<DeleteConfirmation, AppError> {
        let mut store = self.store.write().await;
        match store.remove(id)? {
            Some(removed) => {
                info!("Deleted job {} ({})", removed.id, removed.title);
                Ok(DeleteConfirmation {
                    message: "Job deleted successfully".to_string(),
                })
            }
            None => Err(AppError::NotFound("Job not found".to_string())),
        }
    }

    /// Jobs similar to the first job titled exactly `title`, most similar first.
    /// Empty when the title is unknown or nothing clears the threshold.
    pub async fn recommend_by_title(&self, title: &str) -> Vec<TitleRecommendation> {
        let store = self.store.read().await;
        let records = store.records();
        rank_by_title(records, title, self.similarity_threshold)
            .into_iter()
            .map(|scored| TitleRecommendation::from(&records[scored.index]))
            .collect()
    }

    /// Jobs whose skills resemble `skills`, most similar first.
    pub async fn recommend_by_skills(&self, skills: &str) -> Vec<SkillsRecommendation> {
        let store = self.store.read().await;
        let records = store.records();
        rank_by_skills(records, skills, self.similarity_threshold)
            .into_iter()
            .map(|scored| SkillsRecommendation::from(&records[scored.index]))
            .collect()
    }
}
