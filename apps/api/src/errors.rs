use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::jobs::provider::ProviderError;

/// Message returned to clients when the search provider rejects a request.
/// The upstream status and body only go to the server log.
pub const UPSTREAM_FAILURE_MESSAGE: &str =
    "SerpApi request failed. Check your API key and credits.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing title or skills")]
    BadRequest,

    #[error("API key is not configured")]
    ServerMisconfigured,

    #[error("Upstream search failed (status {status})")]
    Upstream { status: u16, body: String },

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Internal(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Status { status, body } => AppError::Upstream { status, body },
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::ServerMisconfigured => {
                tracing::error!("SERPAPI_API_KEY is not set on the server");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Upstream { status, body } => {
                tracing::error!(status, body = %body, "SerpApi request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UPSTREAM_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            AppError::Internal(msg) => {
                tracing::error!("Job API route error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
