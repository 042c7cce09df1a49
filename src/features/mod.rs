//! The feature rule engine.
//!
//! This is the core of the system: the schema of 30 named features, the
//! rules that evaluate them, and the vector assembly that guarantees the
//! classifier always receives exactly 30 ordered signals.

mod rules;
mod schema;
mod vector;

pub use rules::{evaluate, evaluate_rule};
pub use schema::{FeatureName, FEATURE_COUNT};
pub use vector::{ExtractionOutcome, FeatureVector, Signal, FALLBACK_REASON};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
