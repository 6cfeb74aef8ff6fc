//! Built-in tool registry
//!
//! Wires the demo tools into a [`ToolRegistry`]: `getWeatherInformation`
//! behind the approval gate and `getLocalTime` as an auto-executing tool.

use super::clock::{execute_local_time, local_time_definition};
use super::weather::{GET_WEATHER_INFORMATION, execute_weather, weather_definition};
use toolgate_application::{RegistryError, ToolDescriptor, ToolRegistry, handler_fn};

/// Build the registry of built-in tools
pub fn builtin_registry() -> Result<ToolRegistry, RegistryError> {
    ToolRegistry::builder()
        .tool(ToolDescriptor::confirmation_required(weather_definition()))
        .tool(ToolDescriptor::auto(
            local_time_definition(),
            handler_fn(execute_local_time),
        ))
        .execution(GET_WEATHER_INFORMATION, handler_fn(execute_weather))
        .build()
}
