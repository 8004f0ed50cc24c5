//! Runs the recommendation pipeline for one feedback document and prints the
//! rendered panel. Needs a running jobs API (see `JOBS_PROXY_URL`).

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobs_api::config::RecommendConfig;
use jobs_api::llm_client::{LlmClient, MODEL};
use jobs_api::recommend::controller::{JobRecommendations, Status};
use jobs_api::recommend::keywords::FeedbackDocument;
use jobs_api::recommend::proxy_client::ProxyClient;

#[derive(Debug, Parser)]
#[command(name = "recommend", about = "Suggest real job postings from resume feedback")]
struct Args {
    /// Path to the resume feedback JSON document
    #[arg(short, long)]
    feedback: PathBuf,

    /// Jobs API origin; overrides JOBS_PROXY_URL
    #[arg(long)]
    proxy_url: Option<String>,

    /// Print the status and jobs as JSON instead of HTML
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = RecommendConfig::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("jobs_api={0},recommend={0}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let raw = std::fs::read_to_string(&args.feedback)
        .with_context(|| format!("Failed to read {}", args.feedback.display()))?;
    let feedback: FeedbackDocument =
        serde_json::from_str(&raw).context("Feedback file is not valid JSON")?;

    let proxy_url = args.proxy_url.unwrap_or(config.proxy_url);
    info!("Using model {MODEL}, jobs proxy at {proxy_url}");

    let chat = Arc::new(LlmClient::new(config.anthropic_api_key));
    let source = Arc::new(ProxyClient::new(&proxy_url));
    let controller = JobRecommendations::new(chat.clone(), source);

    controller.sync(&feedback, chat).await;

    if args.json {
        let out = serde_json::json!({
            "status": controller.status(),
            "jobs": controller.jobs(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", controller.view().to_html());
    }

    if controller.status() == Status::Error {
        std::process::exit(1);
    }
    Ok(())
}
