//! Command-line arguments for `meeting-summary`.

use crate::domain::{DomainError, OutputFormat};
use std::path::PathBuf;

pub const HELP: &str = "
Meeting Minutes Summarization CLI

USAGE:
  meeting-summary <file-path> [options]

ARGUMENTS:
  <file-path>           Path to the meeting record file

OPTIONS:
  -f, --format <type>   Output format: korean, json, markdown, text (default: korean)
  -o, --output <path>   Save output to file (default: print to console)
  -n, --note <text>     Additional note to append to the summary
  -h, --help            Show this help message

EXAMPLES:
  # Basic usage (Korean format to console)
  meeting-summary ./meetings/2025-12-19-meeting.txt

  # Specify output format
  meeting-summary ./meetings/meeting.txt --format json

  # Save to file
  meeting-summary ./meetings/meeting.txt --output ./summaries/summary.md

  # Add a note
  meeting-summary ./meetings/meeting.txt --note \"Follow-up required\"

  # Combine options
  meeting-summary ./meetings/meeting.txt -f korean -o ./summary.md -n \"Important\"

ENVIRONMENT:
  MEETING_SUMMARY_DEFAULT_FORMAT   Format used when --format is omitted
  MEETING_SUMMARY_PRINT_STATS      Set to false to skip the statistics block
  RUST_LOG                         Log filter (logs go to stderr)
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Help,
    Summarize(CliArgs),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub file_path: PathBuf,
    /// `None` means the configured default.
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub note: Option<String>,
}

/// Parse arguments (without the program name).
///
/// No arguments, `-h` or `--help` anywhere means help. The first argument is the
/// transcript path; options follow it.
pub fn parse_args<I>(args: I) -> Result<CliCommand, DomainError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        return Ok(CliCommand::Help);
    }

    let mut iter = args.into_iter();
    let file_path = match iter.next() {
        Some(path) if !path.starts_with('-') => PathBuf::from(path),
        Some(flag) => {
            return Err(DomainError::InvalidInput(format!(
                "expected a file path before options, got '{}'",
                flag
            )));
        }
        None => return Ok(CliCommand::Help),
    };

    let mut parsed = CliArgs {
        file_path,
        format: None,
        output: None,
        note: None,
    };

    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "-f" | "--format" => {
                let value = require_value(&flag, iter.next())?;
                parsed.format = Some(value.parse()?);
            }
            "-o" | "--output" => {
                parsed.output = Some(PathBuf::from(require_value(&flag, iter.next())?));
            }
            "-n" | "--note" => {
                parsed.note = Some(require_value(&flag, iter.next())?);
            }
            other => {
                return Err(DomainError::InvalidInput(format!("unknown option '{}'", other)));
            }
        }
    }

    Ok(CliCommand::Summarize(parsed))
}

fn require_value(flag: &str, value: Option<String>) -> Result<String, DomainError> {
    value.ok_or_else(|| DomainError::InvalidInput(format!("option '{}' requires a value", flag)))
}
