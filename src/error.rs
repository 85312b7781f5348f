//! Crate-wide error type and result alias.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CaError>;

#[derive(Debug, Error)]
pub enum CaError {
    /// Skill rating outside the accepted [0.0, 1.0] range.
    #[error("rating must be between 0.0 and 1.0, got {0}")]
    InvalidRating(f64),

    /// A provider fetch failed (network error, timeout, non-success status).
    /// Non-fatal at the pipeline level: the orchestrator logs and skips.
    #[error("fetch failed for {provider} query '{query}': {message}")]
    Fetch {
        provider: String,
        query: String,
        message: String,
    },

    /// Raw provider content could not be parsed into candidates.
    /// Treated identically to a fetch failure by the orchestrator.
    #[error("parse failed for {provider}: {message}")]
    Parse { provider: String, message: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
