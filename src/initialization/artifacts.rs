//! Model artifact loading.
//!
//! The trained classifier, scaler, email classifier, and vectorizer are
//! externally supplied. They are loaded once at process start, validated
//! against the feature schema, and referenced read-only thereafter. A
//! missing or malformed artifact is fatal here: the system cannot produce
//! predictions without them, so there is no graceful degradation on this
//! path.

use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;

use crate::config::{EMAIL_MODEL_FILE, URL_MODEL_FILE, URL_SCALER_FILE, VECTORIZER_FILE};
use crate::error_handling::ArtifactError;
use crate::features::FEATURE_COUNT;
use crate::model::{LinearClassifier, Scaler, TfidfVectorizer};

/// The loaded, validated model artifacts.
///
/// Injected into the checking entry points rather than accessed as ambient
/// globals, which keeps the rule engine and adapters testable in isolation.
#[derive(Debug, Clone)]
pub struct Artifacts {
    /// URL classifier over the scaled 30-wide feature vector.
    pub url_model: LinearClassifier,
    /// Scaler fit alongside the URL classifier.
    pub scaler: Scaler,
    /// Email classifier over the TF-IDF representation.
    pub email_model: LinearClassifier,
    /// TF-IDF vectorizer fit alongside the email classifier.
    pub vectorizer: TfidfVectorizer,
}

impl Artifacts {
    /// Loads and cross-validates all artifacts from a directory.
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory holding the four artifact JSON files
    ///
    /// # Errors
    ///
    /// Returns an [`ArtifactError`] if any file cannot be read or parsed,
    /// or if the artifacts disagree with the feature schema or each other.
    pub fn load(dir: &Path) -> Result<Artifacts, ArtifactError> {
        let scaler: Scaler = load_json(&dir.join(URL_SCALER_FILE))?;
        scaler.validate()?;

        let url_model: LinearClassifier = load_json(&dir.join(URL_MODEL_FILE))?;
        url_model.validate(FEATURE_COUNT)?;

        let vectorizer: TfidfVectorizer = load_json(&dir.join(VECTORIZER_FILE))?;
        vectorizer.validate()?;

        let email_model: LinearClassifier = load_json(&dir.join(EMAIL_MODEL_FILE))?;
        email_model.validate(vectorizer.width())?;

        debug!(
            "Loaded artifacts from {}: {} URL features, {} vocabulary columns",
            dir.display(),
            FEATURE_COUNT,
            vectorizer.width()
        );

        Ok(Artifacts {
            url_model,
            scaler,
            email_model,
            vectorizer,
        })
    }
}

fn load_json<T: DeserializeOwned>(path: &PathBuf) -> Result<T, ArtifactError> {
    let text = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ArtifactError::Malformed {
        path: path.clone(),
        source,
    })
}
