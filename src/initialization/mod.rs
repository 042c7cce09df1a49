//! Process startup: logger, HTTP client, and model artifact loading.

mod artifacts;
mod client;
mod logger;

pub use artifacts::Artifacts;
pub use client::init_client;
pub use logger::init_logger_with;
