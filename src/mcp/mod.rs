//! MCP (Model Context Protocol) server for ytlens.
//!
//! Exposes the YouTube query tools to AI assistants like Claude.
//! Implements JSON-RPC 2.0 over stdio.

mod protocol;
mod server;
mod tools;

pub use protocol::{Tool, ToolCallResult};
pub use server::McpServer;
pub use tools::get_tools;
