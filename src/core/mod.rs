// src/core/mod.rs
//! Configuration and outbound HTTP plumbing shared by the server and the CLI

pub mod config_manager;
pub mod page_fetcher;

pub use config_manager::{ConfigManager, LineConfig, SourcesConfig};
pub use page_fetcher::PageFetcher;
