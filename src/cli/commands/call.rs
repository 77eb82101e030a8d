//! Call command implementation: invoke one tool from the command line.

use crate::cli::Output;
use crate::config::Settings;
use crate::tools::{ToolOutcome, Toolbox};
use anyhow::Result;

/// Run the call command.
pub async fn run_call(tool: &str, args: &str, settings: Settings) -> Result<()> {
    let arguments: serde_json::Value = serde_json::from_str(args)
        .map_err(|e| anyhow::anyhow!("Invalid --args JSON: {}", e))?;
    if !arguments.is_object() {
        anyhow::bail!("--args must be a JSON object");
    }

    let toolbox = Toolbox::from_settings(&settings)?;

    match toolbox.invoke(tool, Some(arguments)).await {
        ToolOutcome::Success(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        ToolOutcome::Failure(message) => {
            Output::error(&message);
            anyhow::bail!("tool call failed")
        }
    }
}
