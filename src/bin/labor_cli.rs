use anyhow::Result;
use clap::Parser;
use labor_bot::cli::{handle_command, LaborCli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("labor_bot=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    handle_command(LaborCli::parse()).await
}
