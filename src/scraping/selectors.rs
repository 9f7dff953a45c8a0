// src/scraping/selectors.rs
//! Markup hooks on ilabor.ntpc.gov.tw. The site is not ours; when its
//! class names change, this is the only file that should need editing.

/// One job activity card on the activities page.
pub const JOB_EVENT_ITEM: &str = "div.event-item";
/// Title inside a job activity card.
pub const JOB_EVENT_NAME: &str = "div.event-item-name";
/// Link inside a job activity card.
pub const JOB_EVENT_LINK: &str = "a";

/// One row of the employment service branch directory.
pub const SERVICE_LOCATION_ITEM: &str = "a.list-group-item";
/// Branch name inside a directory row.
pub const SERVICE_LOCATION_HEADING: &str = "p.tit-h4-b";

/// Heading substrings that mark a row as an actual service point
/// (服務站 = service station, 服務台 = service desk).
pub const SERVICE_LOCATION_KEYWORDS: &[&str] = &["服務站", "服務台"];

/// Replies never list more than this many entries.
pub const MAX_ENTRIES: usize = 10;
