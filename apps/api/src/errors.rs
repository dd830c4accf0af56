use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Error bodies are `{ "error": ..., "details": ... }`; 405 carries no body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Every candidate model was decommissioned. That is a config problem,
    /// not an outage, so the body points operators at `GROQ_MODEL`.
    #[error("Model decommissioned: {0}")]
    ModelDecommissioned(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Job search upstream error: {0}")]
    JobsUpstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED.into_response(),
            AppError::Configuration(message) => {
                tracing::error!("Configuration error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
            AppError::ModelDecommissioned(details) => {
                tracing::error!("All candidate models decommissioned: {details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Model decommissioned",
                        "details": "The model configured is decommissioned. Set GROQ_MODEL to a supported model (see https://console.groq.com/docs/deprecations)."
                    })),
                )
                    .into_response()
            }
            AppError::Completion(details) => {
                tracing::error!("Groq API error: {details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Groq API error", "details": details })),
                )
                    .into_response()
            }
            AppError::JobsUpstream(details) => {
                tracing::error!("Remotive API error: {details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Remotive API error", "details": details })),
                )
                    .into_response()
            }
        }
    }
}
