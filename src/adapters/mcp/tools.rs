//! Tool definitions, argument validation, and dispatch for the tool server.
//!
//! Arguments are validated by deserializing into typed structs and checking the
//! per-tool format whitelist before any parsing of the transcript happens.

use crate::domain::{DomainError, MeetingMetadata, MeetingTranscript, OutputFormat};
use crate::usecases::SummaryService;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

pub const SUMMARIZE_MEETING: &str = "summarize_meeting";
pub const SUMMARIZE_MEETING_FILE: &str = "summarize_meeting_file";
pub const EXTRACT_ACTION_ITEMS: &str = "extract_action_items";

const INLINE_FORMATS: &[OutputFormat] =
    &[OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text];
const FILE_FORMATS: &[OutputFormat] = &OutputFormat::ALL;

#[derive(Debug, Deserialize)]
struct SummarizeMeetingArgs {
    transcript: String,
    #[serde(default)]
    metadata: Option<MeetingMetadata>,
    #[serde(default)]
    format: Option<OutputFormat>,
}

#[derive(Debug, Deserialize)]
struct SummarizeMeetingFileArgs {
    file_path: String,
    #[serde(default)]
    format: Option<OutputFormat>,
}

#[derive(Debug, Deserialize)]
struct ExtractActionItemsArgs {
    transcript: String,
    #[serde(default)]
    format: Option<OutputFormat>,
}

fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T, DomainError> {
    serde_json::from_value(arguments).map_err(|e| DomainError::InvalidInput(e.to_string()))
}

fn check_format(
    format: Option<OutputFormat>,
    default: OutputFormat,
    allowed: &[OutputFormat],
) -> Result<OutputFormat, DomainError> {
    let format = format.unwrap_or(default);
    if allowed.contains(&format) {
        return Ok(format);
    }
    let names: Vec<_> = allowed.iter().map(OutputFormat::as_str).collect();
    Err(DomainError::InvalidInput(format!(
        "format '{}' is not supported here, expected one of: {}",
        format,
        names.join(", ")
    )))
}

/// Input schemas advertised by `tools/list`.
pub fn definitions() -> Value {
    let metadata_schema = json!({
        "type": "object",
        "properties": {
            "date": { "type": "string", "description": "Meeting date (ISO 8601 format)" },
            "attendees": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of meeting attendees"
            },
            "duration": { "type": "integer", "minimum": 0, "description": "Meeting duration in minutes" },
            "title": { "type": "string", "description": "Meeting title" },
            "location": { "type": "string", "description": "Meeting location" }
        }
    });

    json!([
        {
            "name": SUMMARIZE_MEETING,
            "description": "Generates a comprehensive summary from a meeting transcript, including key points, decisions, action items, and next steps",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "transcript": { "type": "string", "description": "The meeting transcript text to summarize" },
                    "metadata": metadata_schema,
                    "format": {
                        "type": "string",
                        "enum": ["json", "markdown", "text"],
                        "default": "markdown",
                        "description": "Output format (json, markdown, or text)"
                    }
                },
                "required": ["transcript"]
            }
        },
        {
            "name": SUMMARIZE_MEETING_FILE,
            "description": "Generates a comprehensive Korean summary from a meeting transcript file. Automatically extracts meeting details, attendees, key points, action items, and next steps.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "file_path": { "type": "string", "description": "Path to the meeting transcript file (txt, md, or any text file)" },
                    "format": {
                        "type": "string",
                        "enum": ["json", "markdown", "text", "korean"],
                        "default": "korean",
                        "description": "Output format - korean (default) for structured Korean format, or json/markdown/text"
                    }
                },
                "required": ["file_path"]
            }
        },
        {
            "name": EXTRACT_ACTION_ITEMS,
            "description": "Extracts action items from a meeting transcript with owners, deadlines, and priorities",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "transcript": { "type": "string", "description": "The meeting transcript text to analyze" },
                    "format": {
                        "type": "string",
                        "enum": ["json", "markdown", "text"],
                        "default": "json",
                        "description": "Output format (json, markdown, or text)"
                    }
                },
                "required": ["transcript"]
            }
        }
    ])
}

/// Wrap tool text as a `tools/call` result.
pub fn tool_result(text: impl Into<String>, is_error: bool) -> Value {
    let mut result = json!({
        "content": [{ "type": "text", "text": text.into() }]
    });
    if is_error {
        result["isError"] = Value::Bool(true);
    }
    result
}

/// Executes tools against the summary service.
pub struct ToolHandler {
    service: Arc<SummaryService>,
}

impl ToolHandler {
    pub fn new(service: Arc<SummaryService>) -> Self {
        Self { service }
    }

    /// Run a tool by name. Unknown names are reported like any other tool failure.
    pub async fn call(&self, name: &str, arguments: Value) -> Result<String, DomainError> {
        info!(tool = name, "tool call");
        let result = self.dispatch(name, arguments).await;
        if let Err(e) = &result {
            warn!(tool = name, error = %e, "tool call failed");
        }
        result
    }

    async fn dispatch(&self, name: &str, arguments: Value) -> Result<String, DomainError> {
        match name {
            SUMMARIZE_MEETING => {
                let args: SummarizeMeetingArgs = parse_args(arguments)?;
                let format = check_format(args.format, OutputFormat::Markdown, INLINE_FORMATS)?;
                let mut input = MeetingTranscript::new(args.transcript);
                input.metadata = args.metadata;
                Ok(self.service.summarize_text(input, format)?.output)
            }
            SUMMARIZE_MEETING_FILE => {
                let args: SummarizeMeetingFileArgs = parse_args(arguments)?;
                let format = check_format(args.format, OutputFormat::Korean, FILE_FORMATS)?;
                let path = PathBuf::from(args.file_path);
                Ok(self.service.summarize_file(&path, format).await?.output)
            }
            EXTRACT_ACTION_ITEMS => {
                let args: ExtractActionItemsArgs = parse_args(arguments)?;
                let format = check_format(args.format, OutputFormat::Json, INLINE_FORMATS)?;
                self.service.extract_action_items(&args.transcript, format)
            }
            other => Err(DomainError::InvalidInput(format!("Unknown tool: {}", other))),
        }
    }
}
