// src/scraping/errors.rs
use thiserror::Error;

/// Why a listing could not be produced. None of these reach the user
/// verbatim; the assistant maps them to a fixed apology.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed listing markup: {0}")]
    Parse(String),

    #[error("cannot resolve link '{href}': {source}")]
    InvalidUrl {
        href: String,
        #[source]
        source: url::ParseError,
    },
}

impl ScrapeError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ScrapeError::Fetch { source, .. } if source.is_timeout())
    }
}
