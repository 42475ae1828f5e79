//! Filesystem adapters. Transcript input and summary output.

pub mod transcript_file;

pub use transcript_file::{FsSummarySink, FsTranscriptSource};
