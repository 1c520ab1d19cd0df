//! Crawling engine
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with timeout and error classification
//! - HTML parsing and link extraction
//! - The frontier queue and crawl loop

mod fetcher;
mod frontier;
mod parser;

pub use fetcher::{build_http_client, fetch_url, FetchOutcome};
pub use frontier::{CancelToken, CrawlReport, Frontier};
pub use parser::extract_links;

use crate::config::Config;
use crate::CrawlError;

/// Runs a complete crawl from a start URL
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Open the visited-URL store and create the pages directory
/// 2. Build the HTTP client
/// 3. Fetch pages and archive them until the frontier empties
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `start_url` - The URL to seed the frontier with
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed; counters for the run
/// * `Err(CrawlError)` - Initialization failed or the store kept failing
pub async fn crawl(config: &Config, start_url: &str) -> Result<CrawlReport, CrawlError> {
    let mut frontier = Frontier::new(config)?;
    frontier.crawl(start_url).await
}
