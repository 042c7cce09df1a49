//! Configuration constants.
//!
//! This module defines the thresholds used by the feature rules and the
//! operational parameters for fetching page content and locating model
//! artifacts.

/// Default per-request fetch timeout in seconds.
///
/// Kept short so an unreachable or slow site does not stall an interactive
/// caller. There are no retries; a single timed-out GET degrades to empty
/// content.
pub const FETCH_TIMEOUT_SECS: u64 = 5;

/// Maximum response body size in bytes (2MB).
/// Responses larger than this degrade to empty content to prevent memory
/// exhaustion.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

// Feature rule thresholds.
/// A URL strictly longer than this is flagged by the `LongURL` rule.
pub const LONG_URL_THRESHOLD: usize = 75;
/// A URL strictly shorter than this takes the benign branch of `ShortURL`.
pub const SHORT_URL_THRESHOLD: usize = 20;
/// More dots than this in the full URL flags the `SubDomains` rule.
pub const MAX_URL_DOTS: usize = 3;
/// A registrable domain label longer than this flags `DomainRegLen`.
pub const REGISTRABLE_LABEL_LENGTH_THRESHOLD: usize = 5;
/// An explicit port outside this set flags `NonStdPort`.
pub const STANDARD_PORTS: [u16; 2] = [80, 443];
/// The `Redirecting//` rule only considers `//` occurring after this many
/// characters, skipping the `scheme://` prefix.
pub const REDIRECT_SCAN_OFFSET: usize = 7;

/// Default User-Agent string for HTTP requests.
///
/// Mimics a current Chrome build so content-dependent rules see the same
/// markup a browser would. Users can override this via the `--user-agent`
/// CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Model artifact locations.
/// Default directory holding the model artifact files.
pub const DEFAULT_MODEL_DIR: &str = "./models";
/// URL classifier artifact file name.
pub const URL_MODEL_FILE: &str = "url_model.json";
/// URL feature scaler artifact file name.
pub const URL_SCALER_FILE: &str = "url_scaler.json";
/// Email classifier artifact file name.
pub const EMAIL_MODEL_FILE: &str = "email_model.json";
/// TF-IDF vectorizer artifact file name.
pub const VECTORIZER_FILE: &str = "tfidf_vectorizer.json";
