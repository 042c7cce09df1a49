//! Best-effort page content retrieval.
//!
//! The content-dependent feature rules inspect the textual body of the page
//! a URL resolves to. Retrieval is strictly best-effort: a single GET with a
//! short timeout and no retries, where any failure (network error, timeout,
//! non-text response, oversized body) degrades to empty content instead of
//! an error. Every content-dependent rule has a defined behavior for empty
//! content, so a dead site never aborts extraction.
//!
//! Fetching is modeled as a capability trait so tests can substitute a
//! deterministic stub instead of performing real network I/O.

use std::future::Future;
use std::sync::Arc;

use log::debug;

use crate::config::MAX_RESPONSE_BODY_SIZE;

/// Capability interface for retrieving the textual content behind a URL.
///
/// Implementations must never fail: the contract is lower-cased body text on
/// success and an empty string on any failure.
pub trait ContentFetcher {
    /// Fetches the page body for `url`, lower-cased, or empty on failure.
    fn fetch(&self, url: &str) -> impl Future<Output = String> + Send;
}

/// Production fetcher backed by a shared `reqwest::Client`.
///
/// The client is built once at startup with the configured timeout and
/// User-Agent (see `initialization::init_client`); the timeout is the only
/// cancellation mechanism in the pipeline.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
}

impl HttpFetcher {
    /// Creates a fetcher around a shared HTTP client.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> String {
        match self.fetch_inner(url).await {
            Some(body) => body,
            None => String::new(),
        }
    }
}

impl HttpFetcher {
    async fn fetch_inner(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                debug!("Fetch failed for {url}: {err}");
                return None;
            }
        };

        if !is_text_response(response.headers()) {
            debug!("Skipping non-text response for {url}");
            return None;
        }
        if let Some(length) = response.content_length() {
            if length as usize > MAX_RESPONSE_BODY_SIZE {
                debug!("Skipping oversized response for {url} ({length} bytes)");
                return None;
            }
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!("Failed to read body for {url}: {err}");
                return None;
            }
        };
        if bytes.len() > MAX_RESPONSE_BODY_SIZE {
            debug!("Skipping oversized response for {url} ({} bytes)", bytes.len());
            return None;
        }

        Some(String::from_utf8_lossy(&bytes).to_lowercase())
    }
}

/// Returns whether a response advertises a textual body.
///
/// A missing Content-Type is treated as textual; an explicitly binary type
/// is not.
fn is_text_response(headers: &reqwest::header::HeaderMap) -> bool {
    match headers.get(reqwest::header::CONTENT_TYPE) {
        Some(value) => {
            let content_type = value.to_str().unwrap_or_default().to_ascii_lowercase();
            content_type.starts_with("text/")
                || content_type.contains("html")
                || content_type.contains("xml")
                || content_type.contains("json")
        }
        None => true,
    }
}
