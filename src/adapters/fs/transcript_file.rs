//! Implements TranscriptSource and SummarySink on the local filesystem.
//!
//! Reads are whole-file UTF-8. Writes go to a temp file that is synced and then
//! renamed over the destination.

use crate::domain::DomainError;
use crate::ports::{SummarySink, TranscriptSource};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Reads transcripts from disk.
#[derive(Debug, Default, Clone)]
pub struct FsTranscriptSource;

impl FsTranscriptSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl TranscriptSource for FsTranscriptSource {
    async fn read_transcript(&self, path: &Path) -> Result<String, DomainError> {
        match fs::read_to_string(path).await {
            Ok(text) => {
                debug!(path = %path.display(), bytes = text.len(), "read transcript");
                Ok(text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(DomainError::NotFound {
                path: path.display().to_string(),
            }),
            Err(e) => Err(DomainError::Io(format!("read {}: {}", path.display(), e))),
        }
    }
}

/// Writes rendered summaries to disk.
#[derive(Debug, Default, Clone)]
pub struct FsSummarySink;

impl FsSummarySink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl SummarySink for FsSummarySink {
    async fn write_summary(&self, path: &Path, content: &str) -> Result<(), DomainError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Io(format!("create output dir: {}", e)))?;
        }

        let mut temp_name = path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = std::path::PathBuf::from(temp_name);

        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Io(format!("create temp file: {}", e)))?;
        f.write_all(content.as_bytes())
            .await
            .map_err(|e| DomainError::Io(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Io(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, path)
            .await
            .map_err(|e| DomainError::Io(format!("rename {}: {}", path.display(), e)))?;

        info!(path = %path.display(), bytes = content.len(), "summary written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meeting.txt");
        fs::write(&path, "Date: 2025-12-19\n회의 내용").await.unwrap();

        let text = FsTranscriptSource::new().read_transcript(&path).await.unwrap();
        assert_eq!(text, "Date: 2025-12-19\n회의 내용");
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = FsTranscriptSource::new()
            .read_transcript(&path)
            .await
            .unwrap_err();
        match err {
            DomainError::NotFound { path: p } => assert!(p.ends_with("nope.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_read_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsTranscriptSource::new()
            .read_transcript(dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Io(_)));
    }

    #[tokio::test]
    async fn test_write_summary_creates_parent_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("summary.md");
        let sink = FsSummarySink::new();

        sink.write_summary(&path, "first").await.unwrap();
        sink.write_summary(&path, "second").await.unwrap();

        assert_eq!(fs::read_to_string(&path).await.unwrap(), "second");
        assert!(!dir.path().join("out").join("summary.md.tmp").exists());
    }
}
