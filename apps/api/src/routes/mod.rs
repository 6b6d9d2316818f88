pub mod health;

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::jobs::handlers as jobs;
use crate::recommend::handlers as recommend;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        // Landing page and its assets
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&static_dir))
        .route("/health", get(health::health_handler))
        // Jobs API
        .route(
            "/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route("/jobs/:job_id", delete(jobs::handle_delete_job))
        // Recommendations API
        .route(
            "/recommendations/jobs",
            get(recommend::handle_recommend_by_title),
        )
        .route(
            "/recommendations/skills",
            get(recommend::handle_recommend_by_skills),
        )
        .with_state(state)
}
