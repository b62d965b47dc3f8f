mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the YAML config file (if any) and applies environment overrides.
///
/// An explicit `CONFIG_PATH` must exist; the default `config.yaml` is optional.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = match load_file(&config_path).await {
        Ok(config) => config,
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound && explicit_path.is_none() => {
            debug!("No {} found, using defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    apply_env_overrides(config, |key| env::var(key).ok())
}

pub async fn load_file(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty file deserializes to YAML null, not an empty mapping.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

/// Overrides file values with the deployment environment variables.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = lookup("HUGGING_FACE_TOKEN") {
        config.inference.api_token = Some(token);
    }
    if let Some(url) = lookup("MODEL_URL") {
        config.inference.model_url = url;
    }
    if let Some(secs) = lookup("INFERENCE_TIMEOUT_SECS") {
        config.inference.timeout_secs = secs
            .parse()
            .map_err(|_| Error::config(format!("Invalid INFERENCE_TIMEOUT_SECS: '{}'", secs)))?;
    }
    if let Some(origin) = lookup("FRONTEND_URL") {
        config.server.cors.allowed_origin = origin;
    }
    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT: '{}'", port)))?;
    }

    Ok(config)
}
