//! Test doubles for the provider seam.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::jobs::models::{SerpApiJob, SerpApiResponse};
use crate::jobs::provider::{JobSearchProvider, ProviderError};

/// Provider results `Job 0..count` with apply links.
pub fn sample_results(count: usize) -> SerpApiResponse {
    SerpApiResponse {
        error: None,
        jobs_results: Some(
            (0..count)
                .map(|n| SerpApiJob {
                    title: Some(format!("Job {n}")),
                    company_name: Some(format!("Company {n}")),
                    location: Some("Hyderabad, Telangana".to_string()),
                    apply_link: Some(format!("https://apply.example/{n}")),
                    related_links: None,
                    share_link: None,
                })
                .collect(),
        ),
    }
}

enum Outcome {
    Results(SerpApiResponse),
    Status { status: u16, body: String },
}

/// Canned provider that records every (query, api_key) it receives.
pub struct FakeProvider {
    outcome: Outcome,
    queries: Mutex<Vec<(String, String)>>,
}

impl FakeProvider {
    pub fn returning(response: SerpApiResponse) -> Self {
        Self {
            outcome: Outcome::Results(response),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_with_status(status: u16, body: String) -> Self {
        Self {
            outcome: Outcome::Status { status, body },
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<(String, String)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobSearchProvider for FakeProvider {
    async fn search(&self, query: &str, api_key: &str) -> Result<SerpApiResponse, ProviderError> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), api_key.to_string()));

        match &self.outcome {
            Outcome::Results(response) => Ok(response.clone()),
            Outcome::Status { status, body } => Err(ProviderError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
