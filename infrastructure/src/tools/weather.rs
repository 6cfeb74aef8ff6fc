//! Weather tool: getWeatherInformation
//!
//! Confirmation-required. The inference step only proposes the call; the
//! forecast is produced by the post-approval execution below.

use serde_json::Value;
use toolgate_domain::{ExecutionContext, ToolDefinition, ToolError, ToolOutput};
use tracing::debug;

/// Tool name constant
pub const GET_WEATHER_INFORMATION: &str = "getWeatherInformation";

/// Get the tool definition for getWeatherInformation
pub fn weather_definition() -> ToolDefinition {
    ToolDefinition::new(GET_WEATHER_INFORMATION, "Show the weather in a given city to the user")
        .with_parameter("city", "string", "The city to get the weather for", true)
}

/// Execute getWeatherInformation after approval
pub async fn execute_weather(args: Value, ctx: ExecutionContext) -> Result<ToolOutput, ToolError> {
    let city = args
        .get("city")
        .and_then(|c| c.as_str())
        .ok_or_else(|| ToolError::invalid_argument("Missing required parameter 'city'"))?;

    debug!(tool_call_id = %ctx.tool_call_id, city, "Looking up weather");
    Ok(ToolOutput::text(format!("The weather in {} is sunny", city)))
}
