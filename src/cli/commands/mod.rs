//! Command implementations.

mod call;
mod config;
mod mcp;
mod tools;

pub use call::run_call;
pub use config::run_config;
pub use mcp::run_mcp;
pub use tools::run_tools;
