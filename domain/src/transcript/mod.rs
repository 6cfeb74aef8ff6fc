//! Transcript domain.
//!
//! - [`message::Message`]: one chat message with ordered [`part::Part`]s
//! - [`invocation::ToolInvocation`]: a tool call embedded in a message
//! - [`repair::repair_transcript`]: normalizes invocations stuck in `call`
//! - [`core_message::to_core_messages`]: model-agnostic projection

pub mod core_message;
pub mod invocation;
pub mod message;
pub mod part;
pub mod repair;

use message::Message;
use std::collections::HashSet;

/// Tool call ids that appear more than once in the transcript.
///
/// Ids are expected to be unique; duplicates are reported in the order they
/// are first repeated.
pub fn duplicate_tool_call_ids(messages: &[Message]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for inv in messages.iter().flat_map(|m| m.tool_invocations()) {
        if !seen.insert(inv.tool_call_id.as_str()) && !duplicates.contains(&inv.tool_call_id) {
            duplicates.push(inv.tool_call_id.clone());
        }
    }
    duplicates
}
