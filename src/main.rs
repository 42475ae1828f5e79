//! Wiring & DI for the `meeting-summary` CLI. Parse args, build adapters, run once.
//! No business logic here; summarization lives in SummaryService.

use dotenv::dotenv;
use meeting_minutes::adapters::cli::{self, CliCommand, CliRunner, console};
use meeting_minutes::adapters::fs::{FsSummarySink, FsTranscriptSource};
use meeting_minutes::ports::{InputPort, SummarySink, TranscriptSource};
use meeting_minutes::shared::config::AppConfig;
use meeting_minutes::shared::telemetry::init_tracing;
use meeting_minutes::usecases::SummaryService;
use std::sync::Arc;
use tracing::{debug, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    init_tracing("warn");
    if let Ok(path) = &env_loaded {
        debug!(path = %path.display(), "loaded .env");
    }

    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            console::print_error(&e);
            eprintln!("{}", cli::HELP);
            std::process::exit(1);
        }
    };
    let args = match command {
        CliCommand::Help => {
            println!("{}", cli::HELP);
            return Ok(());
        }
        CliCommand::Summarize(args) => args,
    };

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config not loaded, using defaults");
        AppConfig::default()
    });

    // --- Adapters ---
    let source: Arc<dyn TranscriptSource> = Arc::new(FsTranscriptSource::new());
    let sink: Arc<dyn SummarySink> = Arc::new(FsSummarySink::new());

    // --- Service + inbound port ---
    let service = Arc::new(SummaryService::new(source));
    let input_port: Arc<dyn InputPort> = Arc::new(CliRunner::new(
        service,
        sink,
        args,
        cfg.default_format_or_default(),
        cfg.print_stats_or_default(),
    ));

    if let Err(e) = input_port.run().await {
        console::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
