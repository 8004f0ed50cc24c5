use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobs_api::config::Config;
use jobs_api::jobs::provider::SerpApiProvider;
use jobs_api::routes::build_router;
use jobs_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("jobs_api={0},api={0}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobs API v{}", env!("CARGO_PKG_VERSION"));

    if config.serpapi_api_key.is_none() {
        warn!("SERPAPI_API_KEY is not set; /api/jobs will answer 500 until it is");
    }

    let provider = Arc::new(SerpApiProvider::new(config.serpapi_url.clone()));
    info!("Job search provider: {}", config.serpapi_url);

    let state = AppState {
        provider,
        serpapi_api_key: config.serpapi_api_key.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
