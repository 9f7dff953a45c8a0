// src/scraping/mod.rs
use scraper::Selector;
use url::Url;

pub mod errors;
pub mod format;
pub mod job_events;
pub mod selectors;
pub mod service_locations;

pub use errors::ScrapeError;
pub use format::{compose_reply, format_entries};
pub use job_events::extract_job_events;
pub use service_locations::extract_service_locations;


/// One scraped (name, link) pair. `detail_url` is always absolute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingEntry {
    pub display_name: String,
    pub detail_url: String,
}

impl ListingEntry {
    pub fn new(display_name: impl Into<String>, detail_url: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            detail_url: detail_url.into(),
        }
    }
}

pub(crate) fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Parse(format!("bad selector '{}': {}", css, e)))
}

pub(crate) fn element_text(element: &scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Turn a scraped href into an absolute URL under the site base.
///
/// Root-relative links (`/branch/x`) are appended to the base path so a
/// prefixed base such as `https://mirror/ilabor/` keeps its prefix.
/// Absolute, protocol-relative and plain relative links follow the usual
/// URL join rules. `base_url` must end in `/`.
pub fn resolve_link(base_url: &Url, href: &str) -> Result<Url, ScrapeError> {
    let href = href.trim();
    let joined = match href.strip_prefix('/') {
        Some(rest) if !rest.starts_with('/') => base_url.join(rest),
        _ => base_url.join(href),
    };
    joined.map_err(|source| ScrapeError::InvalidUrl {
        href: href.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_link() {
        let base = Url::parse("https://ilabor.ntpc.gov.tw/").unwrap();
        assert_eq!(
            resolve_link(&base, "/branch/x").unwrap().as_str(),
            "https://ilabor.ntpc.gov.tw/branch/x"
        );
        assert_eq!(
            resolve_link(&base, "https://other.tw/a?b=1").unwrap().as_str(),
            "https://other.tw/a?b=1"
        );
        assert_eq!(
            resolve_link(&base, "//cdn.tw/x").unwrap().as_str(),
            "https://cdn.tw/x"
        );
    }

    #[test]
    fn test_resolve_link_keeps_base_prefix() {
        let base = Url::parse("http://proxy.local/ilabor/").unwrap();
        assert_eq!(
            resolve_link(&base, "/branch/x").unwrap().as_str(),
            "http://proxy.local/ilabor/branch/x"
        );
        assert_eq!(
            resolve_link(&base, " branch/y ").unwrap().as_str(),
            "http://proxy.local/ilabor/branch/y"
        );
    }

    #[test]
    fn test_resolve_link_rejects_garbage() {
        let base = Url::parse("https://ilabor.ntpc.gov.tw/").unwrap();
        assert!(matches!(
            resolve_link(&base, "http://[::1"),
            Err(ScrapeError::InvalidUrl { .. })
        ));
    }
}
