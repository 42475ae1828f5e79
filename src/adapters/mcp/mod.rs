//! Tool server adapter: JSON-RPC 2.0 over stdio exposing the summarizer as three tools.

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
pub use tools::ToolHandler;
