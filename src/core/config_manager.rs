// src/core/config_manager.rs
//! Environment-driven configuration for the webhook server and the CLI

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;
use url::Url;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LINE_API_BASE_URL: &str = "https://api.line.me";
pub const DEFAULT_LABOR_BASE_URL: &str = "https://ilabor.ntpc.gov.tw";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

// Relative to the site base so a path prefix on LABOR_BASE_URL survives.
const JOB_EVENTS_PATH: &str = "cloud/GoodJob/activities";
const SERVICE_LOCATIONS_PATH: &str = "browse/employment-service/employment-service-branch";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub port: u16,
    pub line: LineConfig,
    pub sources: SourcesConfig,
}

/// Credentials and endpoint for the LINE Messaging API.
#[derive(Debug, Clone)]
pub struct LineConfig {
    pub channel_access_token: String,
    pub channel_secret: String,
    pub api_base_url: String,
}

/// Where the two listing pages live and how long to wait for them.
/// `base_url` always ends in `/`.
#[derive(Debug, Clone)]
pub struct SourcesConfig {
    pub base_url: Url,
    pub timeout: Duration,
    job_events_url: Url,
    service_locations_url: Url,
}

impl ConfigManager {
    /// Load all configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load only what scraping needs; no LINE secrets required
    pub fn load_sources() -> Result<SourcesConfig> {
        SourcesConfig::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        let line = LineConfig::from_lookup(&lookup)?;
        let sources = SourcesConfig::from_lookup(&lookup)?;

        info!(
            "Configuration loaded: port={}, labor site={}, timeout={}s",
            port,
            sources.base_url,
            sources.timeout.as_secs()
        );

        Ok(Self {
            port,
            line,
            sources,
        })
    }
}

impl LineConfig {
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let channel_access_token = required(&lookup, "CHANNEL_ACCESS_TOKEN")?;
        let channel_secret = required(&lookup, "CHANNEL_SECRET")?;
        let api_base_url = lookup("LINE_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_LINE_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            channel_access_token,
            channel_secret,
            api_base_url,
        })
    }
}

impl SourcesConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid labor site base URL: {}", base_url))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let job_events_url = base_url
            .join(JOB_EVENTS_PATH)
            .context("Failed to build job events URL")?;
        let service_locations_url = base_url
            .join(SERVICE_LOCATIONS_PATH)
            .context("Failed to build service locations URL")?;

        Ok(Self {
            base_url,
            timeout,
            job_events_url,
            service_locations_url,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url =
            lookup("LABOR_BASE_URL").unwrap_or_else(|| DEFAULT_LABOR_BASE_URL.to_string());

        let timeout_secs = match lookup("FETCH_TIMEOUT_SECONDS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                anyhow::anyhow!("FETCH_TIMEOUT_SECONDS must be a whole number, got '{}'", raw)
            })?,
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        Self::new(&base_url, Duration::from_secs(timeout_secs))
    }

    pub fn job_events_url(&self) -> &Url {
        &self.job_events_url
    }

    pub fn service_locations_url(&self) -> &Url {
        &self.service_locations_url
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => anyhow::bail!("{} environment variable not set", key),
    }
}
