//! Tool domain traits
//!
//! Contains pure domain logic traits for argument validation.
//! The async tool handler port is defined in the application layer (ports).

use super::entities::ToolDefinition;
use serde_json::Value;

/// Validator for tool invocation arguments
///
/// This is a pure domain trait that validates arguments against a tool
/// definition without any I/O operations.
pub trait ToolValidator {
    /// Validate invocation arguments against a definition
    fn validate(&self, args: &Value, definition: &ToolDefinition) -> Result<(), String>;
}

/// Validates arguments against the tool's JSON Schema document.
///
/// A missing (`null`) arguments value is checked as an empty object when the
/// schema declares an object, so parameterless tools accept an absent `args`.
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator;

impl ToolValidator for SchemaValidator {
    fn validate(&self, args: &Value, definition: &ToolDefinition) -> Result<(), String> {
        let schema = &definition.parameters;
        let validator = jsonschema::Validator::new(schema)
            .map_err(|e| format!("Invalid schema for tool '{}': {}", definition.name, e))?;

        let empty = Value::Object(serde_json::Map::new());
        let args = match args {
            Value::Null if schema.get("type").and_then(Value::as_str) == Some("object") => &empty,
            other => other,
        };

        if validator.is_valid(args) {
            return Ok(());
        }
        let errors: Vec<String> = validator.iter_errors(args).map(|e| e.to_string()).collect();
        Err(format!(
            "Invalid arguments for tool '{}': {}",
            definition.name,
            errors.join("; ")
        ))
    }
}
