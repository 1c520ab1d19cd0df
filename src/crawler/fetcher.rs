//! HTTP fetcher
//!
//! This module handles all HTTP requests for the crawler: building a client
//! with the configured user agent and timeouts, issuing GET requests, and
//! classifying failures. The crawler treats it as a black box that turns a
//! URL into a status-plus-body or an error.

use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchOutcome {
    /// HTTP 200 with the page body
    Success {
        /// Page body content
        body: Vec<u8>,
    },

    /// Any non-200 status code
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network-level failure (connection refused, timeout, TLS error)
    TransportError {
        /// Error description
        error: String,
    },
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - User-Agent header value for every request
/// * `timeout_secs` - Per-request timeout; expiry is reported as a
///   transport error
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str, timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
///
/// Only a 200 response counts as success; everything else is reported as an
/// HTTP or transport failure for the frontier to log and discard.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_url(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();

            if status != StatusCode::OK {
                return FetchOutcome::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.bytes().await {
                Ok(body) => FetchOutcome::Success {
                    body: body.to_vec(),
                },
                Err(e) => FetchOutcome::TransportError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            // Classify error
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection refused".to_string()
            } else {
                e.to_string()
            };

            FetchOutcome::TransportError { error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client("TestBot/1.0", 30);
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_http_client_short_timeout() {
        let client = build_http_client("Mozilla/5.0", 1);
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_unreachable_is_transport_error() {
        let client = build_http_client("TestBot/1.0", 2).unwrap();

        // Nothing listens on this port
        let outcome = fetch_url(&client, "http://127.0.0.1:1/").await;
        assert!(matches!(outcome, FetchOutcome::TransportError { .. }));
    }
}
