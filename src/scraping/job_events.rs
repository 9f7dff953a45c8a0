// src/scraping/job_events.rs
use super::selectors::{JOB_EVENT_ITEM, JOB_EVENT_LINK, JOB_EVENT_NAME, MAX_ENTRIES};
use super::{element_text, resolve_link, selector, ListingEntry, ScrapeError};
use scraper::Html;
use tracing::{debug, info};
use url::Url;

/// Extract the first ten job activities in document order.
///
/// A card without its name node or link among those ten fails the whole
/// page; the caller falls back to the apology message. Links on this page
/// are already absolute and pass through untouched; the occasional
/// relative one is resolved under `base_url`.
pub fn extract_job_events(markup: &str, base_url: &Url) -> Result<Vec<ListingEntry>, ScrapeError> {
    let document = Html::parse_document(markup);
    let item_selector = selector(JOB_EVENT_ITEM)?;
    let name_selector = selector(JOB_EVENT_NAME)?;
    let link_selector = selector(JOB_EVENT_LINK)?;

    let entries = document
        .select(&item_selector)
        .take(MAX_ENTRIES)
        .enumerate()
        .map(|(idx, item)| -> Result<ListingEntry, ScrapeError> {
            let name = item
                .select(&name_selector)
                .next()
                .map(|node| element_text(&node))
                .ok_or_else(|| {
                    ScrapeError::Parse(format!("job event #{} has no name node", idx + 1))
                })?;

            let href = item
                .select(&link_selector)
                .next()
                .and_then(|link| link.value().attr("href"))
                .ok_or_else(|| ScrapeError::Parse(format!("job event #{} has no link", idx + 1)))?;

            let detail_url = resolve_link(base_url, href)?;

            debug!("Job event #{}: {}", idx + 1, name);
            Ok(ListingEntry::new(name, detail_url.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!("Extracted {} job events", entries.len());
    Ok(entries)
}
