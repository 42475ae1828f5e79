//! Domain errors. Used by ports, use cases, and the delivery adapters.
//!
//! Adapters map infrastructure errors into these. The parse/summarize/format
//! pipeline itself only fails when structured-data serialization does.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Caller arguments violate the declared shape, type, or enum constraints.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Malformed traffic on the tool-server transport.
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Serialization(e.to_string())
    }
}
