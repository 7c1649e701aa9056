//! Startup-level errors.
//!
//! Failures during a scan cycle never surface here; they degrade to an empty
//! universe or a neutral signal inside the cycle.

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
