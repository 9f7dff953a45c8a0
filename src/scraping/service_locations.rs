// src/scraping/service_locations.rs
use super::selectors::{
    MAX_ENTRIES, SERVICE_LOCATION_HEADING, SERVICE_LOCATION_ITEM, SERVICE_LOCATION_KEYWORDS,
};
use super::{element_text, resolve_link, selector, ListingEntry, ScrapeError};
use scraper::Html;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use url::Url;

/// Extract up to ten service stations and desks from the branch directory.
///
/// Unlike job events, rows missing their heading or link are skipped rather
/// than failing the page. Rows are kept only when the heading names a
/// service station or desk, then deduplicated on (name, resolved url).
pub fn extract_service_locations(
    markup: &str,
    base_url: &Url,
) -> Result<Vec<ListingEntry>, ScrapeError> {
    let document = Html::parse_document(markup);
    let item_selector = selector(SERVICE_LOCATION_ITEM)?;
    let heading_selector = selector(SERVICE_LOCATION_HEADING)?;

    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for item in document.select(&item_selector) {
        let Some(heading) = item.select(&heading_selector).next() else {
            continue;
        };

        let name = element_text(&heading);
        if !is_service_point(&name) {
            debug!("Skipping directory row: {}", name);
            continue;
        }

        let Some(href) = item.value().attr("href") else {
            warn!("Directory row '{}' has no link, skipping", name);
            continue;
        };

        let detail_url = match resolve_link(base_url, href) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!("Cannot resolve link '{}' for '{}': {}", href, name, e);
                continue;
            }
        };

        let entry = ListingEntry::new(name, detail_url);
        if seen.insert(entry.clone()) {
            entries.push(entry);
        }
    }

    entries.truncate(MAX_ENTRIES);
    info!("Extracted {} service locations", entries.len());
    Ok(entries)
}

fn is_service_point(heading: &str) -> bool {
    SERVICE_LOCATION_KEYWORDS
        .iter()
        .any(|keyword| heading.contains(keyword))
}
