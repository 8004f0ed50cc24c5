//! Axum route handlers for the jobs proxy.

use axum::{body::Bytes, extract::State, Json};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::jobs::models::{JobsResponse, SearchJobsRequest};
use crate::jobs::normalize::normalize_results;
use crate::state::AppState;

/// POST /api/jobs
///
/// Searches the provider for `{title, skills}` and returns at most five
/// normalized postings. The credential is checked before the body is looked at.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<JobsResponse>, AppError> {
    info!("Received request on /api/jobs");

    let api_key = state
        .serpapi_api_key
        .as_deref()
        .ok_or(AppError::ServerMisconfigured)?;

    let request: SearchJobsRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::Internal(e.to_string()))?;
    debug!(title = ?request.title, skills = ?request.skills, "Received from client");

    let query = request.into_query()?;
    let search_text = query.search_text();

    let response = state.provider.search(&search_text, api_key).await?;
    let jobs = normalize_results(response, &search_text);

    Ok(Json(JobsResponse { jobs }))
}

/// Any other method on /api/jobs.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
