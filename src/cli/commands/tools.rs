//! Tools command implementation: list the registered tools.

use crate::cli::Output;
use crate::mcp::get_tools;
use anyhow::Result;

/// Run the tools command.
pub fn run_tools() -> Result<()> {
    let tools = get_tools();
    Output::header(&format!("Registered tools ({})", tools.len()));
    println!();

    for tool in &tools {
        Output::list_item(&tool.name);
        println!("    {}", tool.description);

        if let Some(properties) = tool.input_schema["properties"].as_object() {
            let required: Vec<&str> = tool.input_schema["required"]
                .as_array()
                .map(|r| r.iter().filter_map(|v| v.as_str()).collect())
                .unwrap_or_default();

            for (name, prop) in properties {
                let kind = prop["type"].as_str().unwrap_or("any");
                let marker = if required.contains(&name.as_str()) {
                    "required"
                } else {
                    "optional"
                };
                Output::kv(name, &format!("{} ({})", kind, marker));
            }
        }
        println!();
    }

    Ok(())
}
