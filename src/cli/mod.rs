//! CLI module for ytlens.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// ytlens - YouTube query tools for AI assistants
///
/// Exposes read-only YouTube Data API queries (search, video/channel details,
/// playlists, related and trending videos) as MCP tools, and as direct CLI
/// calls for testing.
#[derive(Parser, Debug)]
#[command(name = "ytlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start MCP server for AI assistant integration (Claude, etc.)
    Mcp,

    /// List the registered tools and their parameters
    Tools,

    /// Invoke one tool directly and print the result
    Call {
        /// Tool name, e.g. "search_videos"
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
