//! Message parts

use super::invocation::ToolInvocation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A part of a message.
///
/// Only [`Part::ToolInvocation`] takes part in reconciliation; every other
/// variant is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Part {
    /// Text content part.
    Text { text: String },

    /// Model reasoning.
    Reasoning { reasoning: String },

    /// Tool invocation part.
    ToolInvocation {
        #[serde(rename = "toolInvocation")]
        tool_invocation: ToolInvocation,
    },

    /// Step start marker.
    StepStart,

    /// Source reference (opaque).
    Source { source: Value },

    /// File attachment.
    File {
        #[serde(rename = "mimeType")]
        mime_type: String,
        data: String,
    },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn tool_invocation(tool_invocation: ToolInvocation) -> Self {
        Self::ToolInvocation { tool_invocation }
    }

    pub fn as_tool_invocation(&self) -> Option<&ToolInvocation> {
        match self {
            Self::ToolInvocation { tool_invocation } => Some(tool_invocation),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_part_wire_shape() {
        let value = serde_json::to_value(Part::text("hello")).unwrap();
        assert_eq!(value, json!({"type": "text", "text": "hello"}));
    }

    #[test]
    fn test_tool_invocation_part_wire_shape() {
        let part: Part = serde_json::from_value(json!({
            "type": "tool-invocation",
            "toolInvocation": {
                "toolCallId": "x",
                "toolName": "t",
                "args": {},
                "state": "call"
            }
        }))
        .unwrap();
        let inv = part.as_tool_invocation().unwrap();
        assert_eq!(inv.tool_call_id, "x");
        assert!(part.as_text().is_none());
    }

    #[test]
    fn test_other_parts_decode() {
        let parts: Vec<Part> = serde_json::from_value(json!([
            {"type": "step-start"},
            {"type": "reasoning", "reasoning": "thinking"},
            {"type": "source", "source": {"url": "https://example.com"}},
            {"type": "file", "mimeType": "image/png", "data": "aGk="}
        ]))
        .unwrap();
        assert_eq!(parts[0], Part::StepStart);
        assert!(matches!(parts[1], Part::Reasoning { .. }));
        assert!(matches!(parts[2], Part::Source { .. }));
        assert!(matches!(parts[3], Part::File { .. }));
    }
}
