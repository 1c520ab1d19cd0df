//! Crawl frontier
//!
//! The frontier owns the pending-URL queue and drives the crawl loop: pop a
//! URL, run it through admission and the durable visited check, fetch it,
//! archive the body, and enqueue the links it yields. The queue is in-memory
//! only and may hold duplicates; the visited store is the sole dedup
//! authority, applied at dequeue time, so queue entries lost in a crash are
//! simply rediscovered and skipped on the next run.
//!
//! URLs whose fetch fails are left unrecorded so a later run can retry
//! them; only successfully fetched pages are marked visited.

use crate::admission::AdmissionPolicy;
use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchOutcome};
use crate::crawler::parser::extract_links;
use crate::store::{PageStore, VisitedStore};
use crate::CrawlError;
use reqwest::Client;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use url::Url;

/// Cooperative cancellation handle for a running crawl
///
/// The frontier checks the token before every dequeue; without it an
/// unbounded crawl could only be stopped by killing the process.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the crawl stop before its next dequeue
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Counters describing a finished crawl
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Pages fetched with HTTP 200
    pub pages_fetched: u64,
    /// Pages written to the page store
    pub pages_saved: u64,
    /// Fetches that failed with a non-200 status or transport error
    pub fetch_failures: u64,
    /// Dequeued URLs skipped because they were already recorded
    pub skipped_visited: u64,
    /// URLs rejected by the admission policy
    pub skipped_admission: u64,
}

/// The crawl frontier: pending queue plus the collaborators that decide,
/// fetch, and persist
pub struct Frontier {
    queue: VecDeque<String>,
    admission: AdmissionPolicy,
    visited: VisitedStore,
    pages: PageStore,
    client: Client,
    cancel: CancelToken,
    max_store_failures: u32,
}

impl Frontier {
    /// Creates a frontier from the given configuration
    ///
    /// Opens the visited store and creates the pages directory; either
    /// failing is fatal, per the initialization error policy.
    pub fn new(config: &Config) -> Result<Self, CrawlError> {
        let visited = VisitedStore::open(Path::new(&config.output.database_path))?;

        let pages = PageStore::create(Path::new(&config.output.pages_dir)).map_err(|source| {
            CrawlError::PagesDir {
                path: config.output.pages_dir.clone(),
                source,
            }
        })?;

        let admission = AdmissionPolicy::new(config.crawler.deny_keywords.clone());
        let client = build_http_client(&config.crawler.user_agent, config.crawler.fetch_timeout_secs)?;

        Ok(Self {
            queue: VecDeque::new(),
            admission,
            visited,
            pages,
            client,
            cancel: CancelToken::new(),
            max_store_failures: config.crawler.max_store_failures,
        })
    }

    /// Returns a handle that stops the crawl before its next dequeue
    pub fn cancel_handle(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Crawls from a start URL until the queue empties
    ///
    /// Per-URL failures are logged and absorbed; the only errors that
    /// propagate are repeated consecutive visited-store failures, which
    /// abort the crawl instead of letting it spin.
    pub async fn crawl(&mut self, start_url: &str) -> Result<CrawlReport, CrawlError> {
        tracing::info!("Starting crawl from {}", start_url);

        let mut report = CrawlReport::default();
        let mut store_failures: u32 = 0;

        self.queue.push_back(start_url.to_string());

        loop {
            if self.cancel.is_cancelled() {
                tracing::info!("Crawl cancelled with {} URLs still queued", self.queue.len());
                break;
            }

            let url = match self.queue.pop_front() {
                Some(url) => url,
                None => break,
            };

            if !self.admission.is_admissible(&url) {
                tracing::debug!("Rejected by admission policy: {}", url);
                report.skipped_admission += 1;
                continue;
            }

            // Fail closed: a store error means we cannot prove the URL is
            // new, so it is skipped for this cycle rather than re-fetched
            match self.visited.is_visited(&url) {
                Ok(true) => {
                    tracing::debug!("Already visited: {}", url);
                    report.skipped_visited += 1;
                    continue;
                }
                Ok(false) => {
                    store_failures = 0;
                }
                Err(e) => {
                    store_failures += 1;
                    tracing::warn!("Visited check failed for {}: {}", url, e);
                    if store_failures >= self.max_store_failures {
                        return Err(CrawlError::StoreFailureLimit {
                            count: store_failures,
                        });
                    }
                    continue;
                }
            }

            tracing::info!("Fetching {}", url);

            match fetch_url(&self.client, &url).await {
                FetchOutcome::Success { body } => {
                    report.pages_fetched += 1;

                    // Atomic claim; the pre-fetch check above is only an
                    // optimization and this is the authoritative gate
                    match self.visited.try_mark_visited(&url) {
                        Ok(true) => {
                            store_failures = 0;
                        }
                        Ok(false) => {
                            tracing::debug!("Lost claim on {}, discarding fetch", url);
                            report.skipped_visited += 1;
                            continue;
                        }
                        Err(e) => {
                            store_failures += 1;
                            tracing::warn!("Failed to record {}: {}", url, e);
                            if store_failures >= self.max_store_failures {
                                return Err(CrawlError::StoreFailureLimit {
                                    count: store_failures,
                                });
                            }
                            continue;
                        }
                    }

                    match self.pages.save(&url, &body) {
                        Ok(path) => {
                            report.pages_saved += 1;
                            tracing::debug!("Saved {} to {}", url, path.display());
                        }
                        Err(e) => {
                            // The URL stays recorded; the body is lost
                            tracing::error!("Failed to write page for {}: {}", url, e);
                        }
                    }

                    self.enqueue_links(&url, &body, &mut report);
                }

                FetchOutcome::HttpError { status_code } => {
                    report.fetch_failures += 1;
                    tracing::warn!("HTTP error fetching URL. Status={}, URL={}", status_code, url);
                }

                FetchOutcome::TransportError { error } => {
                    report.fetch_failures += 1;
                    tracing::warn!("Transport error fetching {}: {}", url, error);
                }
            }
        }

        tracing::info!(
            "Crawl finished: {} fetched, {} saved, {} fetch failures",
            report.pages_fetched,
            report.pages_saved,
            report.fetch_failures
        );

        Ok(report)
    }

    /// Extracts links from a fetched body and enqueues the admissible ones
    ///
    /// No visited check happens here; the queue may hold duplicates and the
    /// dequeue-time check is the sole gate.
    fn enqueue_links(&mut self, page_url: &str, body: &[u8], report: &mut CrawlReport) {
        let base = match Url::parse(page_url) {
            Ok(url) => url,
            // Admission already guaranteed this parses
            Err(_) => return,
        };

        let html = String::from_utf8_lossy(body);
        for link in extract_links(&html, &base) {
            if self.admission.is_admissible(&link) {
                self.queue.push_back(link);
            } else {
                tracing::debug!("Discovered link rejected by admission policy: {}", link);
                report.skipped_admission += 1;
            }
        }
    }

    /// Number of URLs currently queued
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}
