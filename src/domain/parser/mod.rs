//! Transcript parser. Raw text + optional metadata -> [`ParsedMeeting`].
//!
//! Metadata extraction only fills fields the caller left absent; each field's
//! pattern scans the whole transcript and takes its first match. Section
//! extraction classifies every non-blank line independently via [`rules`].

pub mod rules;

use crate::domain::entities::{MeetingMetadata, MeetingTranscript, ParsedMeeting, Section};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use rules::LINE_RULES;

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Date:\s*([^\n]+)").expect("Invalid regex"));
static ATTENDEES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Attendees:\s*([^\n]+)").expect("Invalid regex"));
static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Duration:\s*(\d+)\s*(?:minutes?|mins?)").expect("Invalid regex")
});
static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Title|Subject|Meeting):\s*([^\n]+)").expect("Invalid regex")
});

/// Parse a transcript into resolved metadata and classified sections.
pub fn parse(input: MeetingTranscript) -> ParsedMeeting {
    let metadata = extract_metadata(&input.transcript, input.metadata.unwrap_or_default());
    let sections = extract_sections(&input.transcript);
    debug!(
        sections = sections.len(),
        attendees = metadata.attendee_count(),
        "parsed transcript"
    );
    ParsedMeeting {
        content: input.transcript,
        metadata,
        sections,
    }
}

/// Fill absent metadata fields from `Date:`, `Attendees:`, `Duration:` and
/// `Title:`/`Subject:`/`Meeting:` lines.
pub fn extract_metadata(transcript: &str, mut metadata: MeetingMetadata) -> MeetingMetadata {
    if metadata.date.is_none() {
        metadata.date = first_capture(&DATE_RE, transcript).map(|d| d.trim().to_string());
    }

    if metadata.attendees.is_none() {
        metadata.attendees = first_capture(&ATTENDEES_RE, transcript).map(split_attendees);
    }

    if metadata.duration.is_none() {
        // Values that overflow u32 are treated as absent.
        metadata.duration =
            first_capture(&DURATION_RE, transcript).and_then(|d| d.parse::<u32>().ok());
    }

    if metadata.title.is_none() {
        metadata.title = first_capture(&TITLE_RE, transcript).map(|t| t.trim().to_string());
    }

    metadata
}

/// Classify every non-blank line, preserving transcript order.
pub fn extract_sections(transcript: &str) -> Vec<Section> {
    transcript
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(classify_line)
        .collect()
}

/// Run the ordered rule list over one trimmed line.
pub fn classify_line(line: &str) -> Option<Section> {
    LINE_RULES.iter().find_map(|rule| {
        let section = (rule.classify)(line)?;
        debug!(rule = rule.name, "classified line");
        Some(section)
    })
}

fn first_capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn split_attendees(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
