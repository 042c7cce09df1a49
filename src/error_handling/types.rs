//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for model artifact loading.
///
/// Artifact loading happens once at process start; any of these is fatal
/// there, since the system cannot produce predictions without the trained
/// model, scaler, and vectorizer.
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// The artifact file could not be read.
    #[error("Failed to read artifact {path}: {source}")]
    Io {
        /// Path of the artifact file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The artifact file could not be deserialized.
    #[error("Malformed artifact {path}: {source}")]
    Malformed {
        /// Path of the artifact file.
        path: PathBuf,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },

    /// The artifact's shape does not match the feature schema it must be
    /// applied with. Feature order is contractual: the classifier and its
    /// scaler were fit against one exact ordering, so a mismatch would
    /// silently corrupt predictions if allowed through.
    #[error("Artifact schema mismatch: {0}")]
    SchemaMismatch(String),
}

/// Error raised when a URL cannot be decomposed at all.
///
/// Parsing is lenient: missing components become empty fields rather than
/// errors. The one hard failure is an explicit port that is not a valid
/// decimal port number. Callers convert this into the all-(-1) fallback
/// vector instead of propagating it.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The URL carries an explicit port that cannot be parsed.
    #[error("Invalid explicit port in URL: {0}")]
    InvalidPort(String),
}

/// Error types for classification requests.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The email body was empty or whitespace-only.
    #[error("Email message is empty")]
    EmptyEmail,

    /// A manually supplied feature vector had the wrong number of entries.
    #[error("Expected {expected} feature values, got {actual}")]
    WrongVectorLength {
        /// Required number of entries.
        expected: usize,
        /// Number of entries supplied.
        actual: usize,
    },

    /// A manually supplied feature value was outside {-1, 0, 1}.
    #[error("Feature value {0} is not one of -1, 0, 1")]
    InvalidSignal(i8),
}
