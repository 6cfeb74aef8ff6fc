//! Tool domain entities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

/// Definition of a tool that can be offered to the inference step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "getWeatherInformation")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON schema of the arguments object
    pub parameters: Value,
}

impl ToolDefinition {
    /// Create a definition that takes an empty arguments object
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: json!({
                "type": "object",
                "properties": {},
                "required": [],
            }),
        }
    }

    /// Replace the whole parameter schema
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.parameters = schema;
        self
    }

    /// Add a single property to an object schema
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        param_type: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        let name = name.into();
        let Some(schema) = self.parameters.as_object_mut() else {
            return self;
        };

        let properties = schema
            .entry("properties")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Some(properties) = properties.as_object_mut() {
            properties.insert(
                name.clone(),
                json!({
                    "type": param_type.into(),
                    "description": description.into(),
                }),
            );
        }

        if required {
            let list = schema
                .entry("required")
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Some(list) = list.as_array_mut()
                && !list.iter().any(|v| v.as_str() == Some(name.as_str()))
            {
                list.push(Value::String(name));
            }
        }
        self
    }

    /// Names listed in the schema's `required` array
    pub fn required_parameters(&self) -> Vec<&str> {
        self.parameters
            .get("required")
            .and_then(|v| v.as_array())
            .map(|list| list.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Catalogue of tool definitions, keyed by name
///
/// Ordered by name so that listings and the catalogue sent to the
/// inference step are stable.
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: BTreeMap<String, ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.insert(tool.name.clone(), tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
