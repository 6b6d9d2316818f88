use std::sync::Arc;

use crate::config::Config;
use crate::jobs::service::JobService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the job table; the only path to the backing CSV file.
    pub jobs: Arc<JobService>,
    pub config: Config,
}
