//! Output formatter. [`MeetingSummary`] + [`MeetingMetadata`] -> text.
//!
//! Stateless: every renderer is a free function over borrowed inputs.

pub mod action_items;
pub mod korean;
pub mod markdown;
pub mod plain_text;

use crate::domain::entities::{MeetingMetadata, MeetingSummary, MeetingSummaryOutput, OutputFormat};
use crate::domain::errors::DomainError;

pub use action_items::render_action_items;
pub use korean::{format_yymmdd, to_korean};
pub use markdown::to_markdown;
pub use plain_text::to_plain_text;

/// Width of the `=` / `-` rules in plain-text output.
pub(crate) const RULE_WIDTH: usize = 60;

/// Render in the requested format.
pub fn render(
    format: OutputFormat,
    summary: &MeetingSummary,
    metadata: &MeetingMetadata,
) -> Result<String, DomainError> {
    match format {
        OutputFormat::Json => to_json(summary, metadata),
        OutputFormat::Markdown => Ok(to_markdown(summary, metadata)),
        OutputFormat::Text => Ok(to_plain_text(summary, metadata)),
        OutputFormat::Korean => Ok(to_korean(summary, metadata)),
    }
}

/// Indented `{summary, metadata}` document. Absent optional fields are omitted.
pub fn to_json(summary: &MeetingSummary, metadata: &MeetingMetadata) -> Result<String, DomainError> {
    let output = MeetingSummaryOutput {
        summary: summary.clone(),
        metadata: metadata.clone(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
