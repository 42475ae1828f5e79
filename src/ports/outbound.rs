//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;
use std::path::Path;

/// Transcript source. Yields the full transcript text for a path.
#[async_trait::async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Read the whole transcript.
    ///
    /// A missing path must be reported as `DomainError::NotFound`, distinct from
    /// other I/O failures.
    async fn read_transcript(&self, path: &Path) -> Result<String, DomainError>;
}

/// Summary sink. Persists rendered output at a caller-chosen destination.
#[async_trait::async_trait]
pub trait SummarySink: Send + Sync {
    async fn write_summary(&self, path: &Path, content: &str) -> Result<(), DomainError>;
}
