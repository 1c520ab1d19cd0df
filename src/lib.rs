//! Magpie: a single-host web page archiver
//!
//! This crate implements a web crawler that walks outward from a start URL,
//! saves every fetched page to disk, and records archived URLs in a SQLite
//! database so that no page is fetched twice, even across restarts.

pub mod admission;
pub mod config;
pub mod crawler;
pub mod naming;
pub mod store;

use thiserror::Error;

/// Main error type for magpie operations
///
/// Per-URL problems (a failed fetch, a body that will not parse) are handled
/// inside the crawl loop and never surface here; these variants cover fatal
/// conditions that abort the process.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),

    #[error("Failed to create pages directory {path}: {source}")]
    PagesDir {
        path: String,
        source: std::io::Error,
    },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Aborting crawl after {count} consecutive store failures")]
    StoreFailureLimit { count: u32 },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for magpie operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use admission::AdmissionPolicy;
pub use config::Config;
pub use crawler::{crawl, CancelToken, CrawlReport, Frontier};
pub use store::{PageStore, VisitedStore};
