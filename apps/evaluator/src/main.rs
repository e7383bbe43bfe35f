mod config;
mod errors;
mod evaluation;
mod input;
mod llm_client;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::evaluation::evaluator::Evaluator;
use crate::evaluation::store::ArtifactStore;
use crate::llm_client::LlmClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing GOOGLE_API_KEY)
    let config = Config::from_env()
        .context("Set GOOGLE_API_KEY in the environment or in a .env file")?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV evaluator v{}", env!("CARGO_PKG_VERSION"));

    if config.seed_sample_inputs {
        input::seed_sample_inputs(&config.input_dir).await?;
    }

    let job_description = input::load_job_description(&config.input_dir).await?;
    let candidates = input::load_candidates(&config.input_dir).await?;
    if candidates.is_empty() {
        warn!("No cv<N>.txt files found in {}", config.input_dir.display());
        return Ok(());
    }
    info!(
        "Loaded job description and {} CV(s) from {}",
        candidates.len(),
        config.input_dir.display()
    );

    let llm = LlmClient::new(config.google_api_key.clone())?;
    info!(
        "LLM client initialized (model: {}, temperature: {})",
        llm_client::MODEL,
        config.evaluation.temperature
    );

    let store = ArtifactStore::new(config.output_dir.clone());
    let evaluator = Evaluator::new(Arc::new(llm), store, config.evaluation);

    let summary = evaluator.evaluate_batch(&job_description, &candidates).await;

    info!(
        "Evaluated {}/{} CV(s); artifacts in {}",
        summary.succeeded.len(),
        summary.total(),
        config.output_dir.display()
    );
    for failure in &summary.failed {
        warn!(
            "CV {} failed [{}]: {}",
            failure.number, failure.code, failure.reason
        );
    }

    Ok(())
}
