//! TF-IDF vectorizer artifact for the email path.
//!
//! The vocabulary and idf weights are fixed at training time and loaded
//! from the artifact; this module only applies them. Transformation follows
//! the conventions the artifact was exported under: lowercase, tokens of
//! two or more word characters, term frequency times idf, L2-normalized.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error_handling::ArtifactError;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is a valid literal"));

/// A fitted TF-IDF vectorizer.
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfVectorizer {
    /// Token to column mapping.
    pub vocabulary: HashMap<String, usize>,
    /// Per-column idf weights.
    pub idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Validates that every vocabulary column has an idf weight.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::SchemaMismatch`] if a vocabulary entry
    /// points past the idf table.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        for (token, column) in &self.vocabulary {
            if *column >= self.idf.len() {
                return Err(ArtifactError::SchemaMismatch(format!(
                    "vocabulary token '{token}' maps to column {column}, idf table has {} entries",
                    self.idf.len()
                )));
            }
        }
        Ok(())
    }

    /// Number of columns in the vectorized representation.
    pub fn width(&self) -> usize {
        self.idf.len()
    }

    /// Transforms text into a sparse `(column, weight)` list, sorted by
    /// column. Tokens outside the vocabulary are ignored; unseen-only text
    /// transforms to an empty list.
    pub fn transform(&self, text: &str) -> Vec<(usize, f64)> {
        let lowered = text.to_lowercase();
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for token in TOKEN_PATTERN.find_iter(&lowered) {
            if let Some(column) = self.vocabulary.get(token.as_str()) {
                *counts.entry(*column).or_insert(0) += 1;
            }
        }

        let mut weights: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(column, count)| (column, count as f64 * self.idf[column]))
            .collect();
        weights.sort_by_key(|(column, _)| *column);

        let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut weights {
                *w /= norm;
            }
        }
        weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer() -> TfidfVectorizer {
        TfidfVectorizer {
            vocabulary: HashMap::from([
                ("account".to_string(), 0),
                ("verify".to_string(), 1),
                ("urgent".to_string(), 2),
            ]),
            idf: vec![1.0, 2.0, 3.0],
        }
    }

    #[test]
    fn test_transform_counts_and_weights() {
        let v = vectorizer();
        // "verify verify account" -> tf {account: 1, verify: 2}
        let sparse = v.transform("Verify verify your account");
        assert_eq!(sparse.len(), 2);
        assert_eq!(sparse[0].0, 0);
        assert_eq!(sparse[1].0, 1);

        // Raw weights before normalization: account 1*1.0, verify 2*2.0.
        let norm = (1.0f64 + 16.0).sqrt();
        assert!((sparse[0].1 - 1.0 / norm).abs() < 1e-12);
        assert!((sparse[1].1 - 4.0 / norm).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let v = vectorizer();
        let sparse = v.transform("urgent account verify");
        let norm: f64 = sparse.iter().map(|(_, w)| w * w).sum();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_ignores_unknown_and_short_tokens() {
        let v = vectorizer();
        assert!(v.transform("a an unknown words only").is_empty());
        assert!(v.transform("").is_empty());
    }

    #[test]
    fn test_transform_lowercases() {
        let v = vectorizer();
        let sparse = v.transform("URGENT");
        assert_eq!(sparse.len(), 1);
        assert_eq!(sparse[0].0, 2);
    }

    #[test]
    fn test_validate_rejects_out_of_range_column() {
        let mut v = vectorizer();
        v.vocabulary.insert("overflow".to_string(), 9);
        assert!(v.validate().is_err());
    }
}
