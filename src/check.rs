//! Checking orchestration.
//!
//! Ties the pipeline together: parse the URL, fetch its content
//! best-effort, evaluate the rules, assemble the vector, scale, and
//! classify. Also hosts the manual-vector and email entry points.
//!
//! The URL path never fails: extraction problems collapse into the
//! all-(-1) fallback vector with a failure reason, and the classifier is
//! applied to that like any other vector.

use log::{debug, warn};

use crate::error_handling::CheckError;
use crate::features::{evaluate, ExtractionOutcome, FeatureVector};
use crate::fetch::ContentFetcher;
use crate::initialization::Artifacts;
use crate::model::{EmailVerdict, UrlVerdict};
use crate::parse::ParsedUrl;

/// Outcome of checking one URL.
#[derive(Debug, Clone)]
pub struct UrlReport {
    /// The URL that was checked.
    pub url: String,
    /// The assembled feature vector.
    pub vector: FeatureVector,
    /// Reasons for the risky signals that fired, in rule order.
    pub reasons: Vec<String>,
    /// Raw classifier label (-1 denotes phishing).
    pub label: i64,
    /// The mapped verdict.
    pub verdict: UrlVerdict,
    /// Whether extraction fell back to the all-(-1) vector.
    pub fell_back: bool,
}

/// Outcome of checking one email message.
#[derive(Debug, Clone)]
pub struct EmailReport {
    /// Raw classifier label (1 denotes spam/phishing).
    pub label: i64,
    /// The mapped verdict.
    pub verdict: EmailVerdict,
}

/// Extracts the feature vector and reasons for a URL.
///
/// Parsing happens first and needs no network; content is then fetched
/// best-effort, so a dead site degrades the content-dependent rules to
/// their content-absent defaults instead of aborting extraction.
pub async fn extract_features<F: ContentFetcher>(
    list: &psl::List,
    fetcher: &F,
    url: &str,
) -> ExtractionOutcome {
    let parsed = match ParsedUrl::parse(list, url) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!("Falling back to the failure vector for '{url}': {err}");
            return ExtractionOutcome::fallback();
        }
    };

    let content = fetcher.fetch(url).await;
    debug!("Fetched {} bytes of content for {url}", content.len());

    let (signals, reasons) = evaluate(&parsed, &content);
    ExtractionOutcome::Evaluated {
        vector: FeatureVector::from_signals(&signals),
        reasons,
    }
}

/// Runs the full URL pipeline: extract, scale, classify.
pub async fn check_url<F: ContentFetcher>(
    artifacts: &Artifacts,
    list: &psl::List,
    fetcher: &F,
    url: &str,
) -> UrlReport {
    let outcome = extract_features(list, fetcher, url).await;
    let (vector, reasons, fell_back) = outcome.into_parts();
    let (label, verdict) = classify_vector(artifacts, &vector);
    debug!("{url} classified as {verdict} (label {label})");

    UrlReport {
        url: url.to_string(),
        vector,
        reasons,
        label,
        verdict,
        fell_back,
    }
}

/// Scales and classifies an already assembled feature vector.
///
/// This is the entry point for manually supplied signal values; the URL
/// pipeline funnels through it as well.
pub fn classify_vector(artifacts: &Artifacts, vector: &FeatureVector) -> (i64, UrlVerdict) {
    let scaled = artifacts.scaler.transform(vector);
    let label = artifacts.url_model.predict(&scaled);
    (label, UrlVerdict::from_label(label))
}

/// Classifies an email message body.
///
/// # Errors
///
/// Returns [`CheckError::EmptyEmail`] for empty or whitespace-only input;
/// the classifier is never invoked without a message.
pub fn check_email(artifacts: &Artifacts, text: &str) -> Result<EmailReport, CheckError> {
    if text.trim().is_empty() {
        return Err(CheckError::EmptyEmail);
    }

    let sparse = artifacts.vectorizer.transform(text);
    debug!("Email vectorized into {} active columns", sparse.len());
    let label = artifacts.email_model.predict_sparse(&sparse);

    Ok(EmailReport {
        label,
        verdict: EmailVerdict::from_label(label),
    })
}
