//! Transcript repair.
//!
//! An execution that crashes after the model emitted a call but before any
//! result was recorded leaves an invocation stuck in the `call` state. The
//! inference step expects exactly one result per prior call, so such a
//! transcript could never be continued. Repair replaces the stuck leading
//! invocation of each affected assistant message with a plain text note.

use super::message::{Message, Role};
use super::part::Part;

/// Text that replaces a stuck invocation
pub const TOOL_FAILURE_NOTE: &str = "tool execution failed";

/// Result of [`repair_transcript`]
#[derive(Debug, Clone, PartialEq)]
pub struct RepairOutcome {
    /// The repaired transcript, same length and order as the input
    pub messages: Vec<Message>,
    /// Ids of the messages that were rewritten
    pub repaired: Vec<String>,
}

impl RepairOutcome {
    pub fn is_clean(&self) -> bool {
        self.repaired.is_empty()
    }
}

/// Rewrite every assistant message whose first part is a stuck invocation.
///
/// Only that leading part is replaced; every other part and message passes
/// through unchanged. Never fails, and applying it twice is the same as
/// applying it once.
pub fn repair_transcript(messages: Vec<Message>) -> RepairOutcome {
    let mut repaired = Vec::new();

    let messages = messages
        .into_iter()
        .map(|mut message| {
            let stuck = message.role == Role::Assistant
                && message
                    .parts
                    .first()
                    .and_then(|p| p.as_tool_invocation())
                    .is_some_and(|inv| inv.is_stuck());

            if stuck {
                message.parts[0] = Part::text(TOOL_FAILURE_NOTE);
                repaired.push(message.id.clone());
            }
            message
        })
        .collect();

    RepairOutcome { messages, repaired }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approval::ApprovalVerdict;
    use crate::tool::value_objects::ToolOutput;
    use crate::transcript::invocation::ToolInvocation;
    use serde_json::json;

    fn stuck(id: &str) -> Part {
        Part::tool_invocation(ToolInvocation::call(id, "t", json!({})))
    }

    #[test]
    fn test_stuck_call_is_rewritten() {
        let input: Vec<Message> = serde_json::from_value(json!([{
            "id": "a1",
            "role": "assistant",
            "content": "",
            "parts": [
                {"type": "tool-invocation", "toolInvocation": {"state": "call", "toolCallId": "x", "toolName": "t"}}
            ]
        }]))
        .unwrap();

        let outcome = repair_transcript(input);
        assert_eq!(outcome.repaired, vec!["a1".to_string()]);
        assert_eq!(outcome.messages[0].parts, vec![Part::text("tool execution failed")]);
    }

    #[test]
    fn test_only_leading_part_is_replaced() {
        let message = Message::assistant("a1")
            .with_part(stuck("x"))
            .with_part(Part::text("after"))
            .with_part(stuck("y"));

        let outcome = repair_transcript(vec![message]);
        let parts = &outcome.messages[0].parts;
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], Part::text(TOOL_FAILURE_NOTE));
        assert_eq!(parts[1], Part::text("after"));
        assert!(parts[2].as_tool_invocation().is_some());
    }

    #[test]
    fn test_non_stuck_messages_pass_through() {
        let messages = vec![
            Message::user("u1", "hi"),
            // Leading text, invocation second: untouched
            Message::assistant("a1").with_part(Part::text("x")).with_part(stuck("c0")),
            // Verdict recorded: not stuck
            Message::assistant("a2").with_part(Part::tool_invocation(
                ToolInvocation::call("c1", "t", json!({})).with_verdict(ApprovalVerdict::Approved),
            )),
            // Resolved: not stuck
            Message::assistant("a3").with_part(Part::tool_invocation(
                ToolInvocation::call("c2", "t", json!({})).with_output(ToolOutput::text("ok")),
            )),
            Message::assistant("a4"),
        ];

        let outcome = repair_transcript(messages.clone());
        assert!(outcome.is_clean());
        assert_eq!(outcome.messages, messages);
    }

    #[test]
    fn test_user_messages_are_never_repaired() {
        let mut message = Message::user("u1", "");
        message.parts = vec![stuck("x")];
        let outcome = repair_transcript(vec![message.clone()]);
        assert!(outcome.is_clean());
        assert_eq!(outcome.messages[0], message);
    }

    #[test]
    fn test_repair_is_idempotent() {
        let messages = vec![
            Message::user("u1", "hi"),
            Message::assistant("a1").with_part(stuck("x")).with_part(Part::text("tail")),
            Message::assistant("a2").with_part(stuck("y")),
        ];

        let once = repair_transcript(messages);
        assert_eq!(once.repaired.len(), 2);
        let twice = repair_transcript(once.messages.clone());
        assert!(twice.is_clean());
        assert_eq!(twice.messages, once.messages);
    }

    #[test]
    fn test_order_and_length_preserved() {
        let messages = vec![
            Message::assistant("a1").with_part(stuck("x")),
            Message::user("u1", "next"),
            Message::assistant("a2").with_part(stuck("y")),
        ];
        let outcome = repair_transcript(messages);
        let ids: Vec<_> = outcome.messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "u1", "a2"]);
    }
}
