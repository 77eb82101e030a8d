//! ytlens - YouTube query tools for AI assistants
//!
//! A small adapter that exposes read-only YouTube Data API v3 queries (search,
//! video/channel metadata, playlist listing, related/trending videos) as tools
//! over the Model Context Protocol.
//!
//! # Overview
//!
//! ytlens lets an MCP host (Claude Desktop, etc.):
//! - Search YouTube for videos and playlists
//! - Look up video and channel details
//! - List a channel's recent uploads or a playlist's items
//! - Fetch related and trending videos
//!
//! Each tool takes a few scalar parameters, makes exactly one upstream API
//! call, and returns either a narrow JSON mapping or a human-readable error
//! string. There is no caching, pagination, or retry logic.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management (API key, timeouts)
//! - `youtube` - Upstream YouTube Data API client
//! - `tools` - Tool adapter: projection, error classification, dispatch
//! - `mcp` - MCP server (JSON-RPC 2.0 over stdio)
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use ytlens::config::Settings;
//! use ytlens::tools::{Toolbox, ToolOutcome};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let toolbox = Toolbox::from_settings(&settings)?;
//!
//!     match toolbox
//!         .invoke("search_videos", Some(json!({"query": "lofi"})))
//!         .await
//!     {
//!         ToolOutcome::Success(value) => println!("{}", value),
//!         ToolOutcome::Failure(message) => eprintln!("{}", message),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod tools;
pub mod youtube;

pub use error::{Result, YtLensError};
