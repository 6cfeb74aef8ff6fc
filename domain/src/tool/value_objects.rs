//! Tool domain value objects: immutable output and error types
//!
//! These types form the **output side** of a tool execution. An executor
//! either produces a [`ToolOutput`] or fails with a [`ToolError`]. Unless
//! the reconciler is told to abort, failures are rendered into a textual
//! [`ToolOutput`] so the inference step can react to them narratively.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Error that occurred during tool execution.
///
/// | Code | Description |
/// |------|-------------|
/// | `INVALID_ARGUMENT` | Arguments do not match the tool's schema |
/// | `NOT_FOUND` | Unknown tool or resource |
/// | `EXECUTION_FAILED` | Runtime failure inside the executor |
/// | `PERMISSION_DENIED` | Access denied |
/// | `PANICKED` | The executor panicked |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NOT_FOUND", "PERMISSION_DENIED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            "NOT_FOUND",
            format!("Resource not found: {}", resource.into()),
        )
    }

    pub fn permission_denied(resource: impl Into<String>) -> Self {
        Self::new(
            "PERMISSION_DENIED",
            format!("Permission denied: {}", resource.into()),
        )
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }

    pub fn panicked(message: impl Into<String>) -> Self {
        Self::new("PANICKED", format!("Tool panicked: {}", message.into()))
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Final output of a tool execution.
///
/// Either any JSON-serializable value, or content explicitly tagged as raw
/// markup that downstream renderers must not escape.
///
/// On the wire a JSON output is the plain value itself; only raw markup
/// carries a tag: `{"type": "raw-markup", "content": "..."}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    Json { value: Value },
    RawMarkup { content: String },
}

const RAW_MARKUP_TAG: &str = "raw-markup";

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMarkupWire {
    #[serde(rename = "type")]
    kind: String,
    content: String,
}

impl ToolOutput {
    /// A plain string output
    pub fn text(text: impl Into<String>) -> Self {
        Self::Json {
            value: Value::String(text.into()),
        }
    }

    pub fn json(value: Value) -> Self {
        Self::Json { value }
    }

    pub fn raw_markup(content: impl Into<String>) -> Self {
        Self::RawMarkup {
            content: content.into(),
        }
    }

    /// Decode a plain wire value. Only an object of exactly the raw-markup
    /// shape becomes markup; everything else is kept as JSON.
    pub fn from_wire(value: Value) -> Self {
        if value.get("type").and_then(Value::as_str) == Some(RAW_MARKUP_TAG)
            && let Ok(wire) = serde_json::from_value::<RawMarkupWire>(value.clone())
        {
            return Self::RawMarkup {
                content: wire.content,
            };
        }
        Self::Json { value }
    }

    /// Render a tool failure the way successful results look: a plain string.
    pub fn from_error(error: &ToolError) -> Self {
        Self::text(format!("Error: {}", error))
    }

    /// The output as a string, if it is a JSON string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json { value } => value.as_str(),
            Self::RawMarkup { .. } => None,
        }
    }

    pub fn is_raw_markup(&self) -> bool {
        matches!(self, Self::RawMarkup { .. })
    }

    /// Short single-line rendering for logs and console summaries
    pub fn preview(&self, max_len: usize) -> String {
        let full = match self {
            Self::Json { value: Value::String(s) } => s.clone(),
            Self::Json { value } => value.to_string(),
            Self::RawMarkup { content } => content.clone(),
        };
        let single_line = full.replace('\n', " ");
        if single_line.chars().count() <= max_len {
            single_line
        } else {
            let truncated: String = single_line.chars().take(max_len.saturating_sub(1)).collect();
            format!("{}…", truncated)
        }
    }
}

impl Serialize for ToolOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Json { value } => value.serialize(serializer),
            Self::RawMarkup { content } => RawMarkupWire {
                kind: RAW_MARKUP_TAG.to_string(),
                content: content.clone(),
            }
            .serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ToolOutput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_wire)
    }
}

impl From<&str> for ToolOutput {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for ToolOutput {
    fn from(s: String) -> Self {
        Self::text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_error_display() {
        let err = ToolError::execution_failed("upstream timeout");
        assert_eq!(err.code, "EXECUTION_FAILED");
        assert_eq!(err.to_string(), "[EXECUTION_FAILED] upstream timeout");

        let err = ToolError::not_found("weather station");
        assert!(err.message.contains("weather station"));

        let err = ToolError::panicked("index out of bounds");
        assert_eq!(err.code, "PANICKED");
        assert!(err.message.contains("index out of bounds"));
    }

    #[test]
    fn test_output_from_error_is_text() {
        let output = ToolOutput::from_error(&ToolError::permission_denied("calendar"));
        assert_eq!(
            output.as_text(),
            Some("Error: [PERMISSION_DENIED] Permission denied: calendar")
        );
    }

    #[test]
    fn test_output_wire_shape() {
        assert_eq!(serde_json::to_string(&ToolOutput::text("10am")).unwrap(), r#""10am""#);

        let value = serde_json::to_value(ToolOutput::json(json!({"temp": 21}))).unwrap();
        assert_eq!(value, json!({"temp": 21}));

        let value = serde_json::to_value(ToolOutput::raw_markup("<b>hi</b>")).unwrap();
        assert_eq!(value, json!({"type": "raw-markup", "content": "<b>hi</b>"}));
    }

    #[test]
    fn test_output_decoding() {
        let output: ToolOutput =
            serde_json::from_value(json!({"type": "raw-markup", "content": "<i>x</i>"})).unwrap();
        assert_eq!(output, ToolOutput::raw_markup("<i>x</i>"));

        // Extra keys mean it is an ordinary object, not markup
        let plain = json!({"type": "raw-markup", "content": "x", "lang": "html"});
        let output: ToolOutput = serde_json::from_value(plain.clone()).unwrap();
        assert_eq!(output, ToolOutput::json(plain));

        let output: ToolOutput = serde_json::from_value(json!({"type": "json"})).unwrap();
        assert_eq!(output, ToolOutput::json(json!({"type": "json"})));
    }

    #[test]
    fn test_preview() {
        assert_eq!(ToolOutput::text("short").preview(20), "short");
        assert_eq!(ToolOutput::json(json!({"a": 1})).preview(20), "{\"a\":1}");
        let preview = ToolOutput::text("a".repeat(100)).preview(10);
        assert_eq!(preview.chars().count(), 10);
        assert!(preview.ends_with('…'));
        assert_eq!(ToolOutput::text("two\nlines").preview(20), "two lines");
    }
}
