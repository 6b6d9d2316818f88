//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::jobs::service::{DeleteConfirmation, JobFilter, DEFAULT_LIMIT};
use crate::models::job::{JobRecord, NewJob};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListJobsQuery {
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// GET /jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<ListJobsQuery>,
) -> Result<Json<Vec<JobRecord>>, AppError> {
    let filter = JobFilter {
        employment_type: params.job_type,
        location: params.location,
        category: params.category,
    };
    let jobs = state.jobs.list(&filter, params.skip, params.limit).await?;
    Ok(Json(jobs))
}

/// POST /jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(candidate): Json<NewJob>,
) -> Result<Json<JobRecord>, AppError> {
    let job = state.jobs.create(candidate).await?;
    Ok(Json(job))
}

/// DELETE /jobs/:job_id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(job_id): Path<u64>,
) -> Result<Json<DeleteConfirmation>, AppError> {
    let confirmation = state.jobs.delete(job_id).await?;
    Ok(Json(confirmation))
}
