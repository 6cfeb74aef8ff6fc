//! Result stream events.
//!
//! [`StreamEvent`] is what the reconciler emits on the append-only side
//! channel while it resolves invocations. Each event is self-contained and
//! carries its own `toolCallId`, so a downstream consumer never depends on
//! the order in which concurrently resolved parts were written.

use crate::tool::value_objects::ToolOutput;
use serde::{Deserialize, Serialize};

/// An event written to the result stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// A confirmation-required invocation was resolved (executed or denied).
    /// `result` is written in the same plain form as the transcript part.
    ToolResult {
        #[serde(rename = "toolCallId")]
        tool_call_id: String,
        result: ToolOutput,
    },
    /// The request failed and the stream is being aborted.
    Error { message: String },
}

impl StreamEvent {
    pub fn tool_result(tool_call_id: impl Into<String>, result: ToolOutput) -> Self {
        Self::ToolResult {
            tool_call_id: tool_call_id.into(),
            result,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// The tool call this event belongs to, if any.
    pub fn tool_call_id(&self) -> Option<&str> {
        match self {
            Self::ToolResult { tool_call_id, .. } => Some(tool_call_id),
            Self::Error { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
