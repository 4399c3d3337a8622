mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from(&config_path).await?;

    if let Ok(model_path) = env::var("MODEL_PATH") {
        debug!("MODEL_PATH overrides model.path: {}", model_path);
        config.model.path = model_path;
    }

    Ok(config)
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    parse(&config_str)
}

/// Parses and validates a YAML configuration document.
pub fn parse(yaml: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(yaml)?;
    validate(&config)?;
    Ok(config)
}

pub fn validate(config: &Config) -> Result<()> {
    let prediction = &config.prediction;

    if !(0.0..=1.0).contains(&prediction.threshold) {
        return Err(Error::config(format!(
            "prediction.threshold must be within [0, 1], got {}",
            prediction.threshold
        )));
    }

    if !(0.0..=0.5).contains(&prediction.jitter) {
        return Err(Error::config(format!(
            "prediction.jitter must be within [0, 0.5], got {}",
            prediction.jitter
        )));
    }

    if prediction.max_batch == 0 {
        return Err(Error::config("prediction.max_batch must be at least 1"));
    }

    if config.model.path.trim().is_empty() {
        return Err(Error::config("model.path must not be empty"));
    }

    Ok(())
}
