use anyhow::{Context, Result};
use std::sync::Arc;
use titanic_predictor::{
    config,
    model::LogisticModel,
    predict::{PredictionPolicy, PredictionService},
    server,
};
use tracing::{error, info};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))
                .context("building log filter")?,
        )
        .json()
        .init();

    info!("Starting Titanic survival predictor with log level: {}", log_level);

    // A missing or incompatible model is fatal; never serve without one.
    let model = match LogisticModel::from_path(&config.model.path) {
        Ok(model) => model,
        Err(e) => {
            error!("{}", e);
            anyhow::bail!("cannot start without a model: {e}");
        }
    };

    let policy = PredictionPolicy::from_config(&config.prediction);
    info!(
        "Prediction policy: threshold={} jitter={} max_batch={}",
        policy.threshold, policy.jitter, policy.max_batch
    );

    let service = Arc::new(PredictionService::new(Arc::new(model), policy));

    server::run(config, service).await?;

    Ok(())
}
