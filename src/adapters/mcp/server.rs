//! Implements InputPort as a newline-delimited JSON-RPC tool server.
//!
//! Reads one request per line, writes one response per line. Notifications get
//! no reply. Tool failures are successful responses flagged with `isError`.

use super::protocol::{
    INVALID_PARAMS, INVALID_REQUEST, JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND,
    PARSE_ERROR, PROTOCOL_VERSION,
};
use super::tools::{self, ToolHandler};
use crate::domain::DomainError;
use crate::ports::InputPort;
use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

pub const SERVER_NAME: &str = "mcp-meeting-minutes";

pub struct McpServer {
    tools: ToolHandler,
}

impl McpServer {
    pub fn new(tools: ToolHandler) -> Self {
        Self { tools }
    }

    /// Serve until the reader reaches EOF.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<(), DomainError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| DomainError::Io(format!("read request: {}", e)))?
        {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                let mut frame = serde_json::to_string(&response)?;
                frame.push('\n');
                writer
                    .write_all(frame.as_bytes())
                    .await
                    .map_err(|e| DomainError::Io(format!("write response: {}", e)))?;
                writer
                    .flush()
                    .await
                    .map_err(|e| DomainError::Io(format!("flush response: {}", e)))?;
            }
        }
        info!("client closed the connection");
        Ok(())
    }

    /// Handle one raw frame. `None` means no reply is due.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "unparsable frame");
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    PARSE_ERROR,
                    DomainError::Protocol(format!("parse error: {}", e)).to_string(),
                ));
            }
        };
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "invalid request");
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    INVALID_REQUEST,
                    DomainError::Protocol(format!("invalid request: {}", e)).to_string(),
                ));
            }
        };
        self.handle_request(request).await
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, "request");
        if request.is_notification() {
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, initialize_result(request.params.as_ref())),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(id, json!({ "tools": tools::definitions() })),
            "tools/call" => match call_params(request.params) {
                Ok((name, arguments)) => {
                    let result = match self.tools.call(&name, arguments).await {
                        Ok(text) => tools::tool_result(text, false),
                        Err(e) => tools::tool_result(format!("Error: {}", e), true),
                    };
                    JsonRpcResponse::success(id, result)
                }
                Err(message) => JsonRpcResponse::failure(id, INVALID_PARAMS, message),
            },
            other => JsonRpcResponse::failure(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            ),
        };
        Some(response)
    }
}

fn initialize_result(params: Option<&Value>) -> Value {
    let version = params
        .and_then(|p| p.get("protocolVersion"))
        .and_then(Value::as_str)
        .unwrap_or(PROTOCOL_VERSION);
    json!({
        "protocolVersion": version,
        "capabilities": { "tools": {} },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        }
    })
}

fn call_params(params: Option<Value>) -> Result<(String, Value), String> {
    let mut params = params.ok_or_else(|| "tools/call requires params".to_string())?;
    let name = params
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| "tools/call requires a string 'name'".to_string())?;
    let arguments = params
        .get_mut("arguments")
        .map(Value::take)
        .unwrap_or_else(|| json!({}));
    Ok((name, arguments))
}

#[async_trait]
impl InputPort for McpServer {
    async fn run(&self) -> Result<(), DomainError> {
        info!(name = SERVER_NAME, "tool server running on stdio");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }
}
