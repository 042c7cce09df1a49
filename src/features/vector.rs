//! Feature vector assembly and the extraction fallback.

use crate::error_handling::CheckError;
use crate::features::schema::{FeatureName, FEATURE_COUNT};

/// One ternary signal, always in {-1, 0, 1}.
pub type Signal = i8;

/// Reason appended when extraction fails wholesale and the fallback vector
/// is substituted.
pub const FALLBACK_REASON: &str = "Error while processing URL";

/// An ordered vector of exactly [`FEATURE_COUNT`] signals.
///
/// Created fresh per extraction call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector([Signal; FEATURE_COUNT]);

impl FeatureVector {
    /// Assembles a vector from rule outputs in schema order.
    ///
    /// This is the containment point for partial rule evaluation: missing
    /// trailing entries are padded with -1 and surplus entries are dropped,
    /// so the classifier always sees exactly [`FEATURE_COUNT`] positions.
    pub fn from_signals(signals: &[Signal]) -> FeatureVector {
        let mut values = [-1; FEATURE_COUNT];
        for (slot, signal) in values.iter_mut().zip(signals.iter()) {
            *slot = *signal;
        }
        FeatureVector(values)
    }

    /// The full fallback vector: every position -1.
    pub fn fallback() -> FeatureVector {
        FeatureVector([-1; FEATURE_COUNT])
    }

    /// Validates a manually supplied vector.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::WrongVectorLength`] unless exactly
    /// [`FEATURE_COUNT`] values are given, and [`CheckError::InvalidSignal`]
    /// for any value outside {-1, 0, 1}.
    pub fn try_from_signals(signals: &[Signal]) -> Result<FeatureVector, CheckError> {
        if signals.len() != FEATURE_COUNT {
            return Err(CheckError::WrongVectorLength {
                expected: FEATURE_COUNT,
                actual: signals.len(),
            });
        }
        if let Some(bad) = signals.iter().find(|s| !matches!(**s, -1 | 0 | 1)) {
            return Err(CheckError::InvalidSignal(*bad));
        }
        Ok(FeatureVector::from_signals(signals))
    }

    /// The signals in schema order.
    pub fn as_slice(&self) -> &[Signal] {
        &self.0
    }

    /// The signal at a named position.
    pub fn get(&self, name: FeatureName) -> Signal {
        self.0[name.index()]
    }
}

/// Result of a feature extraction call.
///
/// The fallback is an explicit branch rather than an implicit catch, so the
/// containment boundary is visible in the type.
#[derive(Debug, Clone)]
pub enum ExtractionOutcome {
    /// All rules evaluated; reasons list which risky branches fired.
    Evaluated {
        /// The assembled vector.
        vector: FeatureVector,
        /// Reasons, in rule order.
        reasons: Vec<String>,
    },
    /// Extraction failed wholesale; the all-(-1) vector stands in.
    Fallback {
        /// The single failure reason.
        reason: String,
    },
}

impl ExtractionOutcome {
    /// The conventional fallback outcome.
    pub fn fallback() -> ExtractionOutcome {
        ExtractionOutcome::Fallback {
            reason: FALLBACK_REASON.to_string(),
        }
    }

    /// Flattens the outcome into `(vector, reasons, fell_back)`.
    pub fn into_parts(self) -> (FeatureVector, Vec<String>, bool) {
        match self {
            ExtractionOutcome::Evaluated { vector, reasons } => (vector, reasons, false),
            ExtractionOutcome::Fallback { reason } => {
                (FeatureVector::fallback(), vec![reason], true)
            }
        }
    }
}
