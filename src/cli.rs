// src/cli.rs
use crate::bot::{Assistant, BotAction};
use crate::core::{ConfigManager, SourcesConfig};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "labor-cli")]
#[command(about = "Run the LINE bot's scrapers and dispatcher from a terminal")]
pub struct LaborCli {
    #[command(subcommand)]
    pub command: LaborCommand,

    /// Override FETCH_TIMEOUT_SECONDS
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Override LABOR_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum LaborCommand {
    /// Print the job events reply
    Jobs,
    /// Print the service locations reply
    Locations,
    /// Show what the bot would answer to a message
    Reply { text: String },
}

impl LaborCli {
    fn sources(&self) -> Result<SourcesConfig> {
        let defaults = ConfigManager::load_sources()?;
        let timeout = self
            .timeout
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        match &self.base_url {
            Some(base_url) => SourcesConfig::new(base_url, timeout),
            None => Ok(defaults.with_timeout(timeout)),
        }
    }
}

pub async fn handle_command(cli: LaborCli) -> Result<()> {
    let assistant = Assistant::new(cli.sources()?)?;

    let output = match cli.command {
        LaborCommand::Jobs => assistant.job_events_reply().await,
        LaborCommand::Locations => assistant.service_locations_reply().await,
        LaborCommand::Reply { text } => render_action(&assistant.respond(&text).await),
    };

    println!("{}", output);
    Ok(())
}

pub fn render_action(action: &BotAction) -> String {
    match action {
        BotAction::Text(text) => text.clone(),
        BotAction::Image {
            original_content_url,
            preview_image_url,
        } => format!(
            "[image] original: {}\n[image] preview: {}",
            original_content_url, preview_image_url
        ),
    }
}
