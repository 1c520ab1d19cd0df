use crate::admission::DEFAULT_DENY_KEYWORDS;
use serde::Deserialize;

/// Main configuration structure for magpie
///
/// Every field has a default, so the crawler runs without a config file;
/// a TOML file and CLI overrides refine it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds; a timeout counts as a fetch failure
    #[serde(rename = "fetch-timeout-secs")]
    pub fetch_timeout_secs: u64,

    /// URLs containing any of these substrings are never fetched
    #[serde(rename = "deny-keywords")]
    pub deny_keywords: Vec<String>,

    /// Consecutive database failures tolerated before the crawl aborts
    #[serde(rename = "max-store-failures")]
    pub max_store_failures: u32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".to_string(),
            fetch_timeout_secs: 30,
            deny_keywords: DEFAULT_DENY_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_store_failures: 5,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory fetched pages are written into
    #[serde(rename = "pages-dir")]
    pub pages_dir: String,

    /// Path to the SQLite database recording visited URLs
    #[serde(rename = "database-path")]
    pub database_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pages_dir: "./pages".to_string(),
            database_path: "./links.db".to_string(),
        }
    }
}
