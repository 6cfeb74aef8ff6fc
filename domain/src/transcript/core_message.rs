//! Model-agnostic core messages.
//!
//! The UI-level transcript mixes display concerns (reasoning, sources,
//! step markers) with the conversation itself. Executors and the inference
//! step only need the conversation: who said what, which tools were called
//! and what they returned. [`to_core_messages`] projects a transcript onto
//! that form.
//!
//! ```text
//! assistant { text, tool-invocation(c1, resolved) }
//!   ──▶ assistant { text, tool-call(c1) }
//!       tool      { tool-result(c1) }
//! ```

use super::message::{Message, Role};
use super::part::Part;
use crate::tool::value_objects::ToolOutput;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of a core message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoreRole {
    System,
    User,
    Assistant,
    Tool,
}

/// Content of a core message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CoreContent {
    Text {
        text: String,
    },
    ToolCall {
        #[serde(rename = "toolCallId")]
        tool_call_id: String,
        #[serde(rename = "toolName")]
        tool_name: String,
        args: Value,
    },
    ToolResult {
        #[serde(rename = "toolCallId")]
        tool_call_id: String,
        #[serde(rename = "toolName")]
        tool_name: String,
        result: ToolOutput,
    },
}

/// A message in core form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreMessage {
    pub role: CoreRole,
    pub content: Vec<CoreContent>,
}

impl CoreMessage {
    pub fn text(role: CoreRole, text: impl Into<String>) -> Self {
        Self {
            role,
            content: vec![CoreContent::Text { text: text.into() }],
        }
    }
}

/// Project a transcript onto core messages.
///
/// - system and user messages keep their text (parts first, `content` as
///   fallback); empty ones are dropped
/// - assistant messages keep text and emit one tool call per invocation;
///   invocations with a resolved output are followed by a `tool` message
///   holding their results
/// - reasoning, step markers, sources and files are not part of the
///   conversation and are skipped
///
/// Never fails: invocations without a final output only contribute their
/// call.
pub fn to_core_messages(messages: &[Message]) -> Vec<CoreMessage> {
    let mut core = Vec::with_capacity(messages.len());

    for message in messages {
        match message.role {
            Role::System | Role::User => {
                let text = plain_text(message);
                if text.is_empty() {
                    continue;
                }
                let role = if message.role == Role::System {
                    CoreRole::System
                } else {
                    CoreRole::User
                };
                core.push(CoreMessage::text(role, text));
            }
            Role::Assistant => {
                let mut content = Vec::new();
                let mut results = Vec::new();

                for part in &message.parts {
                    match part {
                        Part::Text { text } => content.push(CoreContent::Text { text: text.clone() }),
                        Part::ToolInvocation { tool_invocation: inv } => {
                            content.push(CoreContent::ToolCall {
                                tool_call_id: inv.tool_call_id.clone(),
                                tool_name: inv.tool_name.clone(),
                                args: inv.args.clone(),
                            });
                            if let Some(output) = inv.output() {
                                results.push(CoreContent::ToolResult {
                                    tool_call_id: inv.tool_call_id.clone(),
                                    tool_name: inv.tool_name.clone(),
                                    result: output.clone(),
                                });
                            }
                        }
                        Part::Reasoning { .. }
                        | Part::StepStart
                        | Part::Source { .. }
                        | Part::File { .. } => {}
                    }
                }

                if message.parts.is_empty() && !message.content.is_empty() {
                    content.push(CoreContent::Text {
                        text: message.content.clone(),
                    });
                }

                if !content.is_empty() {
                    core.push(CoreMessage {
                        role: CoreRole::Assistant,
                        content,
                    });
                }
                if !results.is_empty() {
                    core.push(CoreMessage {
                        role: CoreRole::Tool,
                        content: results,
                    });
                }
            }
        }
    }

    core
}

fn plain_text(message: &Message) -> String {
    let from_parts = message.text_content();
    if from_parts.is_empty() {
        message.content.clone()
    } else {
        from_parts
    }
}
