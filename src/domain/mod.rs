//! Core domain layer. No external I/O dependencies.
//!
//! Entities plus the three-stage pipeline: parser -> summarizer -> formatter.
//! Each stage is a set of pure functions over the previous stage's output.

pub mod entities;
pub mod errors;
pub mod formatter;
pub mod parser;
pub mod summarizer;
pub mod text;

pub use entities::{
    ActionItem, ActionStatus, Decision, MeetingMetadata, MeetingSummary, MeetingSummaryOutput,
    MeetingTranscript, OutputFormat, ParsedMeeting, Priority, Section, SectionKind,
};
pub use errors::DomainError;
