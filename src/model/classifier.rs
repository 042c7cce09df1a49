//! Linear classifier artifact.
//!
//! Both trained classifiers (URL path and email path) reduce to a linear
//! decision function at inference time: a coefficient per input column, an
//! intercept, and a two-class label set. The URL model is applied to the
//! scaled 30-wide feature vector; the email model to the sparse TF-IDF
//! representation.

use serde::Deserialize;

use crate::error_handling::ArtifactError;

/// A two-class linear decision function.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearClassifier {
    /// The two labels, in decision order: a non-positive decision value
    /// predicts `classes[0]`, a positive one `classes[1]`.
    pub classes: [i64; 2],
    /// One coefficient per input column.
    pub coefficients: Vec<f64>,
    /// Decision function intercept.
    pub intercept: f64,
}

impl LinearClassifier {
    /// Validates the artifact's width against the input it will see.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::SchemaMismatch`] if the coefficient count
    /// differs from `expected_width`.
    pub fn validate(&self, expected_width: usize) -> Result<(), ArtifactError> {
        if self.coefficients.len() != expected_width {
            return Err(ArtifactError::SchemaMismatch(format!(
                "classifier has {} coefficients, input is {expected_width} wide",
                self.coefficients.len()
            )));
        }
        Ok(())
    }

    /// Decision value for a dense input.
    pub fn decision(&self, input: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(input.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }

    /// Predicted label for a dense input.
    pub fn predict(&self, input: &[f64]) -> i64 {
        self.label_for(self.decision(input))
    }

    /// Decision value for a sparse `(column, value)` input.
    pub fn decision_sparse(&self, input: &[(usize, f64)]) -> f64 {
        input
            .iter()
            .filter_map(|(column, value)| self.coefficients.get(*column).map(|w| w * value))
            .sum::<f64>()
            + self.intercept
    }

    /// Predicted label for a sparse `(column, value)` input.
    pub fn predict_sparse(&self, input: &[(usize, f64)]) -> i64 {
        self.label_for(self.decision_sparse(input))
    }

    fn label_for(&self, decision: f64) -> i64 {
        if decision > 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        }
    }
}
