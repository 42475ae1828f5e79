//! Wiring for the stdio tool server. stdout carries protocol frames only.

use dotenv::dotenv;
use meeting_minutes::adapters::fs::FsTranscriptSource;
use meeting_minutes::adapters::mcp::{McpServer, ToolHandler};
use meeting_minutes::ports::{InputPort, TranscriptSource};
use meeting_minutes::shared::telemetry::init_tracing;
use meeting_minutes::usecases::SummaryService;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing("info");

    let source: Arc<dyn TranscriptSource> = Arc::new(FsTranscriptSource::new());
    let service = Arc::new(SummaryService::new(source));
    let input_port: Arc<dyn InputPort> = Arc::new(McpServer::new(ToolHandler::new(service)));

    info!("MCP Meeting Minutes Server running on stdio");
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    info!("server stopped");
    Ok(())
}
