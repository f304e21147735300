use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid object key '{input}': {reason}")]
    InvalidObjectKey { input: String, reason: String },
}
