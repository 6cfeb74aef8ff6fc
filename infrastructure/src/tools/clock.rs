//! Clock tool: getLocalTime
//!
//! Auto-executing; runs inline during inference without asking anyone.

use serde_json::Value;
use toolgate_domain::{ExecutionContext, ToolDefinition, ToolError, ToolOutput};

/// Tool name constant
pub const GET_LOCAL_TIME: &str = "getLocalTime";

/// Get the tool definition for getLocalTime
pub fn local_time_definition() -> ToolDefinition {
    ToolDefinition::new(GET_LOCAL_TIME, "Get the local time for a specified location")
        .with_parameter("location", "string", "The location to get the time for", false)
}

/// Execute getLocalTime
pub async fn execute_local_time(
    _args: Value,
    _ctx: ExecutionContext,
) -> Result<ToolOutput, ToolError> {
    Ok(ToolOutput::text("10am"))
}
