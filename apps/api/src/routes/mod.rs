pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::errors::AppError;
use crate::jobs::handlers::handle_job_search;
use crate::state::AppState;

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/analyze",
            post(handle_analyze).fallback(method_not_allowed),
        )
        .route("/api/jobs", get(handle_job_search))
        .with_state(state)
}
