//! Output formatter trait

use serde::Serialize;
use toolgate_domain::Message;

/// A transcript together with what happened to it
#[derive(Debug, Clone, Copy)]
pub struct TranscriptReport<'a> {
    pub messages: &'a [Message],
    /// Ids of messages rewritten by repair
    pub repaired: &'a [String],
    /// Tool call ids resolved in this run
    pub resolved: &'a [String],
}

/// One row of the `tools` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolListing {
    pub name: String,
    pub description: String,
    pub requires_confirmation: bool,
    /// Whether a post-approval execution is registered
    pub has_execution: bool,
}

/// Trait for formatting toolgate results
pub trait OutputFormatter {
    /// Human-readable summary of a transcript
    fn format_summary(&self, report: &TranscriptReport<'_>) -> String;

    /// The transcript in wire format
    fn format_json(&self, messages: &[Message]) -> String;

    /// Registered tools
    fn format_tools(&self, tools: &[ToolListing], json: bool) -> String;
}
