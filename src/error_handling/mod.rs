//! Error types for initialization, artifact loading, parsing, and
//! classification requests.

mod types;

pub use types::{ArtifactError, CheckError, InitializationError, ParseError};
