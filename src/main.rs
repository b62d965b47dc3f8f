use anyhow::Result;
use lineart_proxy::{config, logging, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the real environment still applies
    dotenvy::dotenv().ok();

    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = match logging::env_filter(rust_log.as_deref(), &config.server.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    logging::init(filter);

    info!(
        "Starting line-art proxy with log filter: {}",
        rust_log.as_deref().unwrap_or(&config.server.logs.level)
    );
    info!("Inference endpoint: {}", config.inference.model_url);

    server::run(config).await?;

    Ok(())
}
