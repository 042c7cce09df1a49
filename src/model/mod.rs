//! Classifier adapter: scaler, linear classifiers, TF-IDF vectorizer, and
//! verdict types.
//!
//! These mirror the externally trained artifacts. Nothing in here learns;
//! parameters are loaded once at startup (see `initialization::artifacts`)
//! and applied read-only for the life of the process.

mod classifier;
mod scaler;
mod vectorizer;
mod verdict;

pub use classifier::LinearClassifier;
pub use scaler::Scaler;
pub use vectorizer::TfidfVectorizer;
pub use verdict::{EmailVerdict, UrlVerdict};
