//! Error types for Verimotion

use thiserror::Error;

/// Errors that can occur at the JSON boundary of the scoring pipeline.
///
/// The pure scoring core (timing, motion, shape, score) is total over
/// well-formed inputs and never produces an error; only session parsing,
/// validation, and report encoding can fail.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to parse challenge session: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid challenge session: {0}")]
    InvalidSession(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}
