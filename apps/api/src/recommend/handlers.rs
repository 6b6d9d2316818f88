//! Axum route handlers for the Recommendations API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::job::{SkillsRecommendation, TitleRecommendation};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub job_title: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillsQuery {
    pub skills: String,
}

/// GET /recommendations/jobs
///
/// 404 when the title is unknown or no job clears the similarity threshold.
pub async fn handle_recommend_by_title(
    State(state): State<AppState>,
    Query(params): Query<TitleQuery>,
) -> Result<Json<Vec<TitleRecommendation>>, AppError> {
    let jobs = state.jobs.recommend_by_title(&params.job_title).await;
    if jobs.is_empty() {
        return Err(AppError::NotFound("Job title not found".to_string()));
    }
    Ok(Json(jobs))
}

/// GET /recommendations/skills
pub async fn handle_recommend_by_skills(
    State(state): State<AppState>,
    Query(params): Query<SkillsQuery>,
) -> Result<Json<Vec<SkillsRecommendation>>, AppError> {
    let jobs = state.jobs.recommend_by_skills(&params.skills).await;
    if jobs.is_empty() {
        return Err(AppError::NotFound(
            "No jobs found for the given skills".to_string(),
        ));
    }
    Ok(Json(jobs))
}
