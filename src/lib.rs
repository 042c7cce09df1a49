//! phish_check library: URL and email phishing classification against
//! pre-trained model artifacts.
//!
//! The core is a deterministic feature-extraction engine: 30 rules inspect
//! a URL string, its parsed components, and the textual content of the page
//! it resolves to, emitting a fixed-order vector of ternary signals plus
//! human-readable reasons. The vector is scaled and classified by
//! externally trained artifacts loaded once at startup. A separate path
//! classifies email bodies through a fitted TF-IDF vectorizer.
//!
//! # Example
//!
//! ```no_run
//! use phish_check::{check_url, Artifacts, Config, HttpFetcher};
//! use phish_check::initialization::init_client;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let artifacts = Artifacts::load(&config.model_dir)?;
//! let fetcher = HttpFetcher::new(init_client(&config)?);
//!
//! let report = check_url(&artifacts, &psl::List, &fetcher, "http://example.com/login").await;
//! println!("{}: {} ({} reasons)", report.url, report.verdict, report.reasons.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Checking a URL performs one best-effort HTTP GET and requires a Tokio
//! runtime. Use `#[tokio::main]` in your application or call the async
//! entry points from an async context.

#![warn(missing_docs)]

mod check;
pub mod config;
mod error_handling;
mod features;
mod fetch;
pub mod initialization;
mod model;
mod parse;

// Re-export public API
pub use check::{check_email, check_url, classify_vector, extract_features, EmailReport, UrlReport};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ArtifactError, CheckError, InitializationError, ParseError};
pub use features::{
    ExtractionOutcome, FeatureName, FeatureVector, Signal, FALLBACK_REASON, FEATURE_COUNT,
};
pub use fetch::{ContentFetcher, HttpFetcher};
pub use initialization::Artifacts;
pub use model::{EmailVerdict, LinearClassifier, Scaler, TfidfVectorizer, UrlVerdict};
pub use parse::ParsedUrl;
