//! LINE assistant for the New Taipei City labor bureau.
//!
//! Inbound webhook events are matched against a few keyword commands and
//! answered with listings scraped live from ilabor.ntpc.gov.tw, a static
//! image, or a prompt pointing at the quick-reply menu.

pub mod bot;
pub mod cli;
pub mod core;
pub mod line;
pub mod scraping;
pub mod web;

pub use bot::{Assistant, BotAction, Command};
pub use web::{build_rocket, start_web_server};

/// Forward to the matching `tracing` macro: `app_log!(info, "...", args)`.
#[macro_export]
macro_rules! app_log {
    (trace, $($arg:tt)+) => { ::tracing::trace!($($arg)+) };
    (debug, $($arg:tt)+) => { ::tracing::debug!($($arg)+) };
    (info, $($arg:tt)+) => { ::tracing::info!($($arg)+) };
    (warn, $($arg:tt)+) => { ::tracing::warn!($($arg)+) };
    (error, $($arg:tt)+) => { ::tracing::error!($($arg)+) };
}
