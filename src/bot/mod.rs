// src/bot/mod.rs
use crate::core::{PageFetcher, SourcesConfig};
use crate::line::{LineClient, OutboundMessage};
use crate::scraping::{
    compose_reply, extract_job_events, extract_service_locations, ListingEntry, ScrapeError,
};
use anyhow::Result;
use tracing::{error, info, warn};

pub mod command;
pub mod messages;

pub use command::Command;

/// What to send back for one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotAction {
    Text(String),
    Image {
        original_content_url: String,
        preview_image_url: String,
    },
}

impl BotAction {
    pub fn to_messages(&self) -> Vec<OutboundMessage> {
        match self {
            BotAction::Text(text) => vec![OutboundMessage::text(text.clone())],
            BotAction::Image {
                original_content_url,
                preview_image_url,
            } => vec![OutboundMessage::Image {
                original_content_url: original_content_url.clone(),
                preview_image_url: preview_image_url.clone(),
            }],
        }
    }

    /// Send this action as the reply to `reply_token`.
    ///
    /// If an image cannot be delivered the user gets a text carrying the
    /// error instead. Text failures are returned to the caller as is.
    pub async fn deliver(&self, client: &LineClient, reply_token: &str) -> Result<()> {
        match client.reply(reply_token, &self.to_messages()).await {
            Ok(()) => Ok(()),
            Err(e) if matches!(self, BotAction::Image { .. }) => {
                warn!("Image reply failed, falling back to text: {:#}", e);
                client
                    .reply_text(reply_token, messages::send_error(&e))
                    .await
            }
            Err(e) => Err(e),
        }
    }
}

/// Keyword dispatcher. Holds no per-conversation state; every call is an
/// independent fetch, parse and format.
#[derive(Clone)]
pub struct Assistant {
    fetcher: PageFetcher,
    sources: SourcesConfig,
}

impl Assistant {
    pub fn new(sources: SourcesConfig) -> Result<Self> {
        let fetcher = PageFetcher::new(sources.timeout)?;
        Ok(Self { fetcher, sources })
    }

    pub async fn respond(&self, text: &str) -> BotAction {
        let command = Command::from_text(text);
        info!("Dispatching {:?} for message: {}", command, text.trim());

        match command {
            Command::JobEvents => BotAction::Text(self.job_events_reply().await),
            Command::ServiceLocations => BotAction::Text(self.service_locations_reply().await),
            Command::HrAwareness => BotAction::Image {
                original_content_url: messages::HR_AWARENESS_IMAGE_URL.to_string(),
                preview_image_url: messages::HR_AWARENESS_PREVIEW_URL.to_string(),
            },
            Command::Unknown => BotAction::Text(messages::DEFAULT_PROMPT.to_string()),
        }
    }

    pub async fn job_events_reply(&self) -> String {
        match self.fetch_job_events().await {
            Ok(entries) => compose_reply(messages::JOB_EVENTS_HEADER, &entries)
                .unwrap_or_else(|| {
                    warn!("Job events page listed nothing");
                    messages::JOB_EVENTS_UNAVAILABLE.to_string()
                }),
            Err(e) => {
                log_scrape_failure("job events", &e);
                messages::JOB_EVENTS_UNAVAILABLE.to_string()
            }
        }
    }

    pub async fn service_locations_reply(&self) -> String {
        match self.fetch_service_locations().await {
            Ok(entries) => compose_reply(messages::SERVICE_LOCATIONS_HEADER, &entries)
                .unwrap_or_else(|| {
                    warn!("Service location page listed nothing");
                    messages::SERVICE_LOCATIONS_UNAVAILABLE.to_string()
                }),
            Err(e) => {
                log_scrape_failure("service locations", &e);
                messages::SERVICE_LOCATIONS_UNAVAILABLE.to_string()
            }
        }
    }

    pub async fn fetch_job_events(&self) -> Result<Vec<ListingEntry>, ScrapeError> {
        let markup = self
            .fetcher
            .fetch(self.sources.job_events_url().as_str())
            .await?;
        extract_job_events(&markup, &self.sources.base_url)
    }

    pub async fn fetch_service_locations(&self) -> Result<Vec<ListingEntry>, ScrapeError> {
        let markup = self
            .fetcher
            .fetch(self.sources.service_locations_url().as_str())
            .await?;
        extract_service_locations(&markup, &self.sources.base_url)
    }
}

fn log_scrape_failure(listing: &str, e: &ScrapeError) {
    if e.is_timeout() {
        warn!("Timed out fetching {}: {}", listing, e);
    } else {
        error!("Error fetching {}: {}", listing, e);
    }
}
