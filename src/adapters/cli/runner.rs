//! Implements InputPort for one CLI invocation: summarize a file, then print or save it.

use super::args::CliArgs;
use super::console;
use crate::domain::{DomainError, OutputFormat};
use crate::ports::{InputPort, SummarySink};
use crate::usecases::SummaryService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// CLI adapter. Runs the pipeline once for the parsed arguments.
pub struct CliRunner {
    service: Arc<SummaryService>,
    sink: Arc<dyn SummarySink>,
    args: CliArgs,
    default_format: OutputFormat,
    print_stats: bool,
}

impl CliRunner {
    pub fn new(
        service: Arc<SummaryService>,
        sink: Arc<dyn SummarySink>,
        args: CliArgs,
        default_format: OutputFormat,
        print_stats: bool,
    ) -> Self {
        Self {
            service,
            sink,
            args,
            default_format,
            print_stats,
        }
    }
}

/// Append the free-text note after a horizontal rule.
pub fn append_note(mut output: String, note: Option<&str>) -> String {
    if let Some(note) = note {
        output.push_str(&format!("\n\n---\n\n**Note:** {}\n", note));
    }
    output
}

#[async_trait]
impl InputPort for CliRunner {
    async fn run(&self) -> Result<(), DomainError> {
        let format = self.args.format.unwrap_or(self.default_format);
        info!(path = %self.args.file_path.display(), format = %format, "summarizing file");

        let report = self
            .service
            .summarize_file(&self.args.file_path, format)
            .await?;
        let output = append_note(report.output, self.args.note.as_deref());

        match &self.args.output {
            Some(path) => {
                self.sink.write_summary(path, &output).await?;
                console::print_saved(path);
            }
            None => println!("{}", output),
        }

        if self.print_stats {
            console::print_stats(&report.stats);
        }
        Ok(())
    }
}
