use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::recommend::DEFAULT_SIMILARITY_THRESHOLD;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// CSV file mirroring the job table. Rewritten on every mutation.
    pub jobs_csv_path: PathBuf,
    /// Directory holding the landing page (`index.html`) and its assets.
    pub static_dir: PathBuf,
    pub similarity_threshold: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            jobs_csv_path: PathBuf::from(env_or("JOBS_CSV_PATH", "jobs.csv")),
            static_dir: PathBuf::from(env_or("STATIC_DIR", "static")),
            similarity_threshold: parse_threshold(&env_or("SIMILARITY_THRESHOLD", "0.1"))?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8000,
            rust_log: "info".to_string(),
            jobs_csv_path: PathBuf::from("jobs.csv"),
            static_dir: PathBuf::from("static"),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

/// Parses a cosine-similarity threshold, which must lie in [0, 1].
fn parse_threshold(raw: &str) -> Result<f64> {
    let threshold = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("SIMILARITY_THRESHOLD must be a number, got '{raw}'"))?;
    if !(0.0..=1.0).contains(&threshold) {
        bail!("SIMILARITY_THRESHOLD must be between 0 and 1, got {threshold}");
    }
    Ok(threshold)
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
