// Shared test helpers for artifact fixtures and fetch stubs.
//
// This module provides common utilities used across multiple test files to
// reduce duplication.

use std::path::Path;

use strum::IntoEnumIterator;

use phish_check::{ContentFetcher, FeatureName};

/// The contractual feature names, in schema order.
#[allow(dead_code)] // Used by other test files
pub fn schema_feature_names() -> Vec<String> {
    FeatureName::iter().map(|n| n.as_str().to_string()).collect()
}

/// Writes a complete, valid artifact set into `dir`.
///
/// The fixtures are built for predictable behavior rather than realism:
/// - identity scaler (mean 0, scale 1 everywhere);
/// - URL model whose decision is the negated `UsingIP` signal, so an
///   IP-hosted URL classifies as phishing (-1) and anything else as
///   legitimate (1);
/// - email model over a three-word vocabulary with intercept -0.5, so any
///   message containing a vocabulary token classifies as spam (1) and
///   everything else as legitimate (0).
#[allow(dead_code)]
pub fn write_default_artifacts(dir: &Path) {
    let names = schema_feature_names();
    let count = names.len();

    let scaler = serde_json::json!({
        "feature_names": names,
        "mean": vec![0.0; count],
        "scale": vec![1.0; count],
    });
    std::fs::write(
        dir.join("url_scaler.json"),
        serde_json::to_string_pretty(&scaler).unwrap(),
    )
    .expect("should write scaler artifact");

    let mut coefficients = vec![0.0; count];
    coefficients[0] = -1.0;
    let url_model = serde_json::json!({
        "classes": [-1, 1],
        "coefficients": coefficients,
        "intercept": 0.0,
    });
    std::fs::write(
        dir.join("url_model.json"),
        serde_json::to_string_pretty(&url_model).unwrap(),
    )
    .expect("should write URL model artifact");

    let vectorizer = serde_json::json!({
        "vocabulary": {"verify": 0, "account": 1, "winner": 2},
        "idf": [1.0, 1.0, 1.0],
    });
    std::fs::write(
        dir.join("tfidf_vectorizer.json"),
        serde_json::to_string_pretty(&vectorizer).unwrap(),
    )
    .expect("should write vectorizer artifact");

    let email_model = serde_json::json!({
        "classes": [0, 1],
        "coefficients": [1.0, 1.0, 1.0],
        "intercept": -0.5,
    });
    std::fs::write(
        dir.join("email_model.json"),
        serde_json::to_string_pretty(&email_model).unwrap(),
    )
    .expect("should write email model artifact");
}

/// Fetcher stub returning a fixed body, lower-cased like the real fetcher.
#[allow(dead_code)]
pub struct StubFetcher {
    pub body: String,
}

#[allow(dead_code)]
impl StubFetcher {
    pub fn with_body(body: &str) -> StubFetcher {
        StubFetcher {
            body: body.to_string(),
        }
    }

    /// A stub behaving like an unreachable content source.
    pub fn unreachable() -> StubFetcher {
        StubFetcher {
            body: String::new(),
        }
    }
}

impl ContentFetcher for StubFetcher {
    async fn fetch(&self, _url: &str) -> String {
        self.body.to_lowercase()
    }
}
