use anyhow::{Context, Result};
use labor_bot::app_log;
use labor_bot::{core::ConfigManager, start_web_server};
use std::fs::OpenOptions;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "labor_bot=info,ntpc_labor_bot=info,rocket::server=off";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let config = ConfigManager::load().context("Invalid configuration, refusing to start")?;

    app_log!(info, "Starting NTPC labor LINE bot");
    app_log!(info, "Server: http://0.0.0.0:{}", config.port);
    app_log!(info, "LINE API: {}", config.line.api_base_url);

    start_web_server(config).await
}

fn init_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match std::env::var("LOG_FILE") {
        Ok(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true) // Clear file on startup
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path))?;

            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(file)
                        .with_current_span(false)
                        .with_span_list(false),
                )
                .with(filter)
                .init();
        }
        Err(_) => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .init();
        }
    }

    Ok(())
}
