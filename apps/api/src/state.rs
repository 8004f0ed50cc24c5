use std::sync::Arc;

use crate::jobs::provider::JobSearchProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable search backend. Default: SerpApiProvider.
    pub provider: Arc<dyn JobSearchProvider>,
    /// SerpApi credential, injected at construction. `None` makes /api/jobs answer 500.
    pub serpapi_api_key: Option<String>,
}
