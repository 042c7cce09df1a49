//! Feature scaler artifact.
//!
//! The classifier was fit on scaled features; the exact scaler fit alongside
//! it must be applied, with matching feature order, before every prediction.

use serde::Deserialize;
use strum::IntoEnumIterator;

use crate::error_handling::ArtifactError;
use crate::features::{FeatureName, FeatureVector, FEATURE_COUNT};

/// Standard scaler parameters exported from the training run.
///
/// Applies `(x - mean) / scale` per position. The artifact carries the
/// feature names it was fit with so the contractual ordering can be checked
/// at load time instead of silently corrupting predictions later.
#[derive(Debug, Clone, Deserialize)]
pub struct Scaler {
    /// Feature names, in the order the scaler was fit.
    pub feature_names: Vec<String>,
    /// Per-feature means.
    pub mean: Vec<f64>,
    /// Per-feature scale divisors.
    pub scale: Vec<f64>,
}

impl Scaler {
    /// Validates the artifact against the feature schema.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::SchemaMismatch`] if any parameter list is
    /// not exactly [`FEATURE_COUNT`] wide, if the recorded feature names
    /// deviate from the schema order, or if any scale divisor is zero.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.feature_names.len() != FEATURE_COUNT
            || self.mean.len() != FEATURE_COUNT
            || self.scale.len() != FEATURE_COUNT
        {
            return Err(ArtifactError::SchemaMismatch(format!(
                "scaler expects {FEATURE_COUNT} features, artifact has {} names, {} means, {} scales",
                self.feature_names.len(),
                self.mean.len(),
                self.scale.len()
            )));
        }
        for (position, name) in FeatureName::iter().enumerate() {
            if self.feature_names[position] != name.as_str() {
                return Err(ArtifactError::SchemaMismatch(format!(
                    "feature {position} is '{}', artifact says '{}'",
                    name.as_str(),
                    self.feature_names[position]
                )));
            }
        }
        if let Some(position) = self.scale.iter().position(|s| *s == 0.0) {
            return Err(ArtifactError::SchemaMismatch(format!(
                "scale divisor for feature {position} is zero"
            )));
        }
        Ok(())
    }

    /// Scales a feature vector into classifier input space.
    pub fn transform(&self, vector: &FeatureVector) -> Vec<f64> {
        vector
            .as_slice()
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(signal, (mean, scale))| (f64::from(*signal) - mean) / scale)
            .collect()
    }
}
