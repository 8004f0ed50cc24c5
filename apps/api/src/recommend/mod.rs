// Recommendation pipeline: feedback → AI keywords → jobs proxy → renderable view.
// AI calls go through llm_client::ChatService; proxy calls go through proxy_client::JobSource.

pub mod controller;
pub mod keywords;
pub mod prompts;
pub mod proxy_client;
pub mod view;

use thiserror::Error;

/// Every way a recommendation run can fail. All of them end in `Status::Error`;
/// the variant only matters for the logs.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Could not extract keywords from AI: {0}")]
    Extraction(String),

    #[error("Could not parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("AI did not return valid title or skills.")]
    Validation,

    #[error("Failed to reach jobs proxy: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to fetch jobs. Server responded with: {0}")]
    Http(String),

    #[error("{0}")]
    Proxy(String),
}

#[cfg(test)]
pub(crate) mod testing;
