//! Job search provider — the only place that talks to SerpApi.
//!
//! `AppState` holds an `Arc<dyn JobSearchProvider>` so tests can swap in a
//! canned provider without network access.

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::info;

use crate::jobs::models::SerpApiResponse;

const ENGINE: &str = "google_jobs";
const GOOGLE_DOMAIN: &str = "google.co.in";
const LOCATION: &str = "India";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid provider URL: {0}")]
    Url(String),

    #[error("provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned status {status}")]
    Status { status: u16, body: String },

    #[error("provider returned invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait JobSearchProvider: Send + Sync {
    /// Runs a free-text job search and returns the provider's raw payload.
    async fn search(&self, query: &str, api_key: &str) -> Result<SerpApiResponse, ProviderError>;
}

/// SerpApi `google_jobs` engine over HTTPS.
#[derive(Clone)]
pub struct SerpApiProvider {
    client: Client,
    base_url: String,
}

impl SerpApiProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl JobSearchProvider for SerpApiProvider {
    async fn search(&self, query: &str, api_key: &str) -> Result<SerpApiResponse, ProviderError> {
        let url = build_search_url(&self.base_url, query, api_key)?;
        info!("Calling SerpApi with URL: {}", redact(&url));

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Builds the search URL. Region and domain are fixed.
pub fn build_search_url(base_url: &str, query: &str, api_key: &str) -> Result<Url, ProviderError> {
    Url::parse_with_params(
        base_url,
        &[
            ("engine", ENGINE),
            ("q", query),
            ("google_domain", GOOGLE_DOMAIN),
            ("location", LOCATION),
            ("api_key", api_key),
        ],
    )
    .map_err(|e| ProviderError::Url(e.to_string()))
}

/// Copy of `url` safe for logs: the `api_key` value is replaced with `REDACTED`.
pub fn redact(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" {
                "REDACTED".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
