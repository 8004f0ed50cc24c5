//! Client side of `POST /api/jobs`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::jobs::models::{Job, JobQuery};
use crate::recommend::RecommendError;

/// Where the controller gets postings from. `ProxyClient` is the real one.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_jobs(&self, query: &JobQuery) -> Result<Vec<Job>, RecommendError>;
}

#[derive(Clone)]
pub struct ProxyClient {
    client: Client,
    endpoint: String,
}

impl ProxyClient {
    /// `base_url` is the proxy origin, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/api/jobs", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl JobSource for ProxyClient {
    async fn fetch_jobs(&self, query: &JobQuery) -> Result<Vec<Job>, RecommendError> {
        let response = self.client.post(&self.endpoint).json(query).send().await?;

        let status = response.status();
        // Body is read as text first: the proxy may answer with something that isn't JSON.
        let body = response.text().await?;
        debug!(status = status.as_u16(), body = %body, "Response from /api/jobs");

        let jobs = decode_proxy_body(status, &body)?;
        debug!(count = jobs.len(), "Jobs received from server");
        Ok(jobs)
    }
}

#[derive(Debug, Deserialize)]
struct ProxyPayload {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    jobs: Option<Vec<Job>>,
}

/// Second stage of the decode: status check on the raw text, then JSON.
pub fn decode_proxy_body(status: StatusCode, body: &str) -> Result<Vec<Job>, RecommendError> {
    if !status.is_success() {
        return Err(RecommendError::Http(body.to_string()));
    }

    let payload: ProxyPayload = serde_json::from_str(body)?;

    if let Some(error) = payload.error.filter(|e| !e.is_empty()) {
        return Err(RecommendError::Proxy(error));
    }

    Ok(payload.jobs.unwrap_or_default())
}
