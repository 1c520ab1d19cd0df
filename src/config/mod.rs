//! Configuration module for magpie
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. All paths and crawl parameters flow through [`Config`]; there is
//! no ambient global state.
//!
//! # Example
//!
//! ```no_run
//! use magpie::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Saving pages under: {}", config.output.pages_dir);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig};

// Re-export parser functions
pub use parser::load_config;
