//! Magpie main entry point
//!
//! This is the command-line interface for the magpie page archiver.

use clap::Parser;
use magpie::config::{load_config, Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Magpie: a single-host web page archiver
///
/// Magpie crawls outward from a start URL, saving each fetched page to disk
/// and recording every archived URL in a SQLite database so repeated runs
/// never fetch the same page twice.
#[derive(Parser, Debug)]
#[command(name = "magpie")]
#[command(version)]
#[command(about = "A single-host web page archiver", long_about = None)]
struct Cli {
    /// URL to start crawling from
    #[arg(value_name = "START_URL")]
    start_url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Directory to save fetched pages into (overrides config)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Path to the visited-URL database (overrides config)
    #[arg(long, value_name = "PATH")]
    database: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, falling back to defaults when no file is given
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    // CLI flags override the file
    if let Some(dir) = cli.output_dir {
        config.output.pages_dir = dir;
    }
    if let Some(db) = cli.database {
        config.output.database_path = db;
    }

    tracing::info!(
        "Pages: {}, database: {}",
        config.output.pages_dir,
        config.output.database_path
    );

    let report = magpie::crawler::crawl(&config, &cli.start_url).await?;

    tracing::info!(
        "Done: {} pages saved, {} already visited, {} fetch failures",
        report.pages_saved,
        report.skipped_visited,
        report.fetch_failures
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("magpie=info,warn"),
            1 => EnvFilter::new("magpie=debug,info"),
            2 => EnvFilter::new("magpie=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
