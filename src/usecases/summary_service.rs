//! Summary service. Orchestrates read -> parse -> summarize -> render.
//!
//! The pipeline itself is synchronous; only transcript reading goes through
//! an async port.

use crate::domain::{
    DomainError, MeetingMetadata, MeetingSummary, MeetingTranscript, OutputFormat, formatter,
    parser, summarizer,
};
use crate::ports::TranscriptSource;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Counts reported next to a rendered summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryStats {
    /// Base name of the source file, when the transcript came from one.
    pub file: Option<String>,
    pub attendees: usize,
    pub key_points: usize,
    pub decisions: usize,
    pub action_items: usize,
}

impl SummaryStats {
    fn new(metadata: &MeetingMetadata, summary: &MeetingSummary) -> Self {
        Self {
            file: None,
            attendees: metadata.attendee_count(),
            key_points: summary.key_points.len(),
            decisions: summary.decisions.len(),
            action_items: summary.action_items.len(),
        }
    }
}

/// Rendered output plus its statistics.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub output: String,
    pub stats: SummaryStats,
}

/// Service for turning transcripts into rendered summaries.
pub struct SummaryService {
    source: Arc<dyn TranscriptSource>,
}

impl SummaryService {
    pub fn new(source: Arc<dyn TranscriptSource>) -> Self {
        Self { source }
    }

    /// Summarize inline transcript text.
    pub fn summarize_text(
        &self,
        input: MeetingTranscript,
        format: OutputFormat,
    ) -> Result<SummaryReport, DomainError> {
        let parsed = parser::parse(input);
        let summary = summarizer::summarize(&parsed);
        let output = formatter::render(format, &summary, &parsed.metadata)?;
        let stats = SummaryStats::new(&parsed.metadata, &summary);
        info!(
            format = %format,
            sections = parsed.sections.len(),
            decisions = stats.decisions,
            action_items = stats.action_items,
            "summary rendered"
        );
        Ok(SummaryReport { output, stats })
    }

    /// Read a transcript through the source port, then summarize it.
    pub async fn summarize_file(
        &self,
        path: &Path,
        format: OutputFormat,
    ) -> Result<SummaryReport, DomainError> {
        let transcript = self.source.read_transcript(path).await?;
        info!(path = %path.display(), bytes = transcript.len(), "transcript loaded");
        let mut report = self.summarize_text(MeetingTranscript::new(transcript), format)?;
        report.stats.file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(report)
    }

    /// Run the pipeline and render only the action items.
    pub fn extract_action_items(
        &self,
        transcript: &str,
        format: OutputFormat,
    ) -> Result<String, DomainError> {
        let parsed = parser::parse(MeetingTranscript::new(transcript));
        let summary = summarizer::summarize(&parsed);
        info!(
            format = %format,
            action_items = summary.action_items.len(),
            "action items extracted"
        );
        formatter::render_action_items(&summary.action_items, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fs::FsTranscriptSource;
    use crate::domain::MeetingSummaryOutput;

    const TRANSCRIPT: &str = "Title: Arbitrum 파트너십 논의
Date: 2025-12-19
Attendees: 김철수, 이영희, Mike

Mike: The partner program numbers look strong and the grant timeline is realistic.
We agreed to proceed with the joint campaign.
Action: 김철수 will prepare partnership proposal by next Friday
Action: 이영희 will share the budget sheet by Monday
Action: 김철수 should book the venue ASAP
Next meeting: reconvene on January 5th";

    fn service() -> SummaryService {
        SummaryService::new(Arc::new(FsTranscriptSource::new()))
    }

    #[test]
    fn test_summarize_text_korean() {
        let report = service()
            .summarize_text(MeetingTranscript::new(TRANSCRIPT), OutputFormat::Korean)
            .unwrap();
        assert!(report.output.contains("251219 Arbitrum 파트너십 논의"));
        assert!(report.output.contains("**김철수:**"));
        assert!(report.output.contains("**이영희:**"));
        assert!(report.output.contains("- 김철수\n- 이영희\n- Mike"));
        assert_eq!(report.stats.attendees, 3);
        assert_eq!(report.stats.decisions, 1);
        assert_eq!(report.stats.action_items, 3);
        assert_eq!(report.stats.file, None);
    }

    #[test]
    fn test_korean_groups_only_owner_tasks() {
        let report = service()
            .summarize_text(MeetingTranscript::new(TRANSCRIPT), OutputFormat::Korean)
            .unwrap();
        let kim = report.output.split("**김철수:**").nth(1).unwrap();
        let kim = kim.split("**이영희:**").next().unwrap();
        assert!(kim.contains("prepare partnership proposal"));
        assert!(kim.contains("book the venue"));
        assert!(!kim.contains("budget sheet"));

        let lee = report.output.split("**이영희:**").nth(1).unwrap();
        let lee = lee.split("## Next Steps/Meeting").next().unwrap();
        assert!(lee.contains("budget sheet"));
        assert!(!lee.contains("book the venue"));
    }

    #[test]
    fn test_json_round_trip_through_service() {
        let metadata = MeetingMetadata {
            date: Some("2025-12-20".to_string()),
            location: Some("Seoul".to_string()),
            ..Default::default()
        };
        let input = MeetingTranscript::new(TRANSCRIPT).with_metadata(metadata);
        let report = service().summarize_text(input, OutputFormat::Json).unwrap();
        let output: MeetingSummaryOutput = serde_json::from_str(&report.output).unwrap();
        assert_eq!(output.metadata.date.as_deref(), Some("2025-12-20"));
        assert_eq!(output.metadata.location.as_deref(), Some("Seoul"));
        assert_eq!(output.metadata.title.as_deref(), Some("Arbitrum 파트너십 논의"));
        assert_eq!(output.summary.action_items.len(), 3);
    }

    #[test]
    fn test_empty_transcript_korean_headers() {
        let report = service()
            .summarize_text(MeetingTranscript::new(""), OutputFormat::Korean)
            .unwrap();
        for header in [
            "## Meeting Details",
            "## Attendees",
            "## Key Discussion Points",
            "## Action Items",
            "## Next Steps/Meeting",
        ] {
            assert!(report.output.contains(header), "missing {}", header);
        }
    }

    #[test]
    fn test_extract_action_items() {
        let out = service()
            .extract_action_items(TRANSCRIPT, OutputFormat::Text)
            .unwrap();
        assert!(out.starts_with("ACTION ITEMS"));
        assert!(out.contains("[HIGH]"));
        assert!(out.contains("(@이영희) - Due: Monday"));
    }

    #[tokio::test]
    async fn test_summarize_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2025-12-19-meeting.txt");
        tokio::fs::write(&path, TRANSCRIPT).await.unwrap();

        let report = service()
            .summarize_file(&path, OutputFormat::Markdown)
            .await
            .unwrap();
        assert!(report.output.starts_with("# Meeting Summary"));
        assert_eq!(report.stats.file.as_deref(), Some("2025-12-19-meeting.txt"));
    }

    #[tokio::test]
    async fn test_summarize_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = service()
            .summarize_file(&path, OutputFormat::Korean)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("missing.txt"));
    }
}
