//! Domain entities. Pure data structures for the core business.
//!
//! No file or protocol types here. Every stage of the pipeline produces one of
//! these as an immutable value and hands it to the next.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::DomainError;

/// Meeting metadata. Caller-supplied fields always win over extracted ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<String>>,
    /// Duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl MeetingMetadata {
    pub fn attendee_count(&self) -> usize {
        self.attendees.as_ref().map_or(0, Vec::len)
    }
}

/// Raw input to the parser: the transcript text plus whatever metadata the caller knows.
#[derive(Debug, Clone, Default)]
pub struct MeetingTranscript {
    pub transcript: String,
    pub metadata: Option<MeetingMetadata>,
}

impl MeetingTranscript {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: MeetingMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Discussion,
    Decision,
    Action,
}

/// One classified, trimmed, non-blank transcript line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Section {
    pub fn new(kind: SectionKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            speaker: None,
            timestamp: None,
        }
    }

    pub fn is(&self, kind: SectionKind) -> bool {
        self.kind == kind
    }
}

/// Parser output. Owns the raw transcript, resolved metadata, and sections in line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMeeting {
    pub content: String,
    pub metadata: MeetingMetadata,
    pub sections: Vec<Section>,
}

impl ParsedMeeting {
    pub fn count(&self, kind: SectionKind) -> usize {
        self.sections.iter().filter(|s| s.is(kind)).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub decision: String,
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Colored marker used by the markdown renderers.
    pub fn indicator(&self) -> &'static str {
        match self {
            Priority::High => "🔴",
            Priority::Medium => "🟡",
            Priority::Low => "🟢",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action item lifecycle. Items are always created `Pending`; the other states
/// only exist so that externally produced summaries still deserialize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: ActionStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingSummary {
    pub overview: String,
    pub key_points: Vec<String>,
    pub decisions: Vec<Decision>,
    pub action_items: Vec<ActionItem>,
    pub topics_discussed: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Structured-data document: what the `json` format serializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingSummaryOutput {
    pub summary: MeetingSummary,
    pub metadata: MeetingMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Text,
    Korean,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Text,
        OutputFormat::Korean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Text => "text",
            OutputFormat::Korean => "korean",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| {
                DomainError::InvalidInput(format!(
                    "unknown format '{}', expected one of: json, markdown, text, korean",
                    s
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("korean".parse::<OutputFormat>().unwrap(), OutputFormat::Korean);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "JSON".parse::<OutputFormat>(),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_metadata_skips_absent_fields() {
        let meta = MeetingMetadata {
            title: Some("Sync".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"title":"Sync"}"#);
    }

    #[test]
    fn test_action_item_serializes_lowercase_enums() {
        let item = ActionItem {
            task: "Ship it".to_string(),
            owner: None,
            deadline: None,
            priority: Priority::High,
            status: ActionStatus::Pending,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["priority"], "high");
        assert_eq!(json["status"], "pending");
        assert!(json.get("owner").is_none());
    }

    #[test]
    fn test_section_kind_serializes_as_type() {
        let section = Section::new(SectionKind::Decision, "We agreed");
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "decision");
    }
}
