use anyhow::{Context, Result};

pub const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com/search";
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:8080";

/// Server configuration loaded from environment variables.
///
/// `SERPAPI_API_KEY` is optional at startup: the jobs route reports the
/// missing credential per request instead of refusing to boot.
#[derive(Debug, Clone)]
pub struct Config {
    pub serpapi_api_key: Option<String>,
    pub serpapi_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            serpapi_api_key: optional_env("SERPAPI_API_KEY"),
            serpapi_url: optional_env("SERPAPI_URL")
                .unwrap_or_else(|| DEFAULT_SERPAPI_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Configuration for the `recommend` binary, which plays the browser's part:
/// it talks to the AI service and then to a running jobs proxy.
#[derive(Debug, Clone)]
pub struct RecommendConfig {
    pub anthropic_api_key: String,
    pub proxy_url: String,
    pub rust_log: String,
}

impl RecommendConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(RecommendConfig {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            proxy_url: optional_env("JOBS_PROXY_URL")
                .unwrap_or_else(|| DEFAULT_PROXY_URL.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Treats an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
