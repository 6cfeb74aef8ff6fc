//! Console output formatter for reconciled transcripts

use crate::output::formatter::{OutputFormatter, ToolListing, TranscriptReport};
use colored::Colorize;
use toolgate_domain::{InvocationState, Message, Part, ToolInvocation, ToolOutcome};

const PREVIEW_LEN: usize = 72;

/// Formats transcripts and tool listings for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a transcript summary
    pub fn format_summary(report: &TranscriptReport<'_>) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!(
            "Transcript ({} messages)",
            report.messages.len()
        )));
        output.push('\n');

        for message in report.messages {
            output.push_str(&Self::format_message(message, report.resolved));
        }

        if !report.repaired.is_empty() {
            output.push_str(&format!(
                "\n{} {}\n",
                "Repaired:".yellow().bold(),
                report.repaired.join(", ")
            ));
        }

        if !report.resolved.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "Resolved:".green().bold(),
                report.resolved.join(", ")
            ));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(messages: &[Message]) -> String {
        serde_json::to_string_pretty(messages).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format the tool listing
    pub fn format_tools(tools: &[ToolListing], json: bool) -> String {
        if json {
            return serde_json::to_string_pretty(tools).unwrap_or_else(|_| "[]".to_string());
        }

        let mut output = String::new();
        output.push_str(&Self::header("Registered tools"));
        output.push('\n');

        for tool in tools {
            let kind = if tool.requires_confirmation {
                "confirm".yellow().bold()
            } else {
                "auto".green().bold()
            };
            output.push_str(&format!("  {:<8} {}", kind, tool.name.bold()));
            if tool.requires_confirmation && !tool.has_execution {
                output.push_str(&format!(" {}", "(no execution)".red()));
            }
            output.push('\n');
            if !tool.description.is_empty() {
                output.push_str(&format!("           {}\n", tool.description.dimmed()));
            }
        }

        output
    }

    fn format_message(message: &Message, resolved: &[String]) -> String {
        let mut output = format!(
            "\n{} {}\n",
            format!("[{}]", message.role).cyan().bold(),
            message.id.dimmed()
        );

        if message.parts.is_empty() && !message.content.is_empty() {
            output.push_str(&Self::indent(&message.content, "  "));
            output.push('\n');
        }

        for part in &message.parts {
            output.push_str(&Self::format_part(part, resolved));
            output.push('\n');
        }

        output
    }

    fn format_part(part: &Part, resolved: &[String]) -> String {
        match part {
            Part::Text { text } => Self::indent(text, "  "),
            Part::Reasoning { .. } => format!("  {}", "(reasoning)".dimmed()),
            Part::StepStart => format!("  {}", "(step)".dimmed()),
            Part::Source { .. } => format!("  {}", "(source)".dimmed()),
            Part::File { mime_type, .. } => format!("  {}", format!("(file {})", mime_type).dimmed()),
            Part::ToolInvocation { tool_invocation } => {
                Self::format_invocation(tool_invocation, resolved)
            }
        }
    }

    fn format_invocation(invocation: &ToolInvocation, resolved: &[String]) -> String {
        let status = match (&invocation.state, &invocation.result) {
            (InvocationState::PartialCall, _) => "streaming".dimmed().to_string(),
            (_, None) => "awaiting approval".yellow().to_string(),
            (InvocationState::Call, Some(_)) => "pending".yellow().to_string(),
            (InvocationState::Result, Some(ToolOutcome::PendingApproval(verdict))) => {
                format!("{} (not executed)", verdict).yellow().to_string()
            }
            (InvocationState::Result, Some(ToolOutcome::Resolved(output))) => {
                output.preview(PREVIEW_LEN)
            }
        };

        let marker = if resolved.contains(&invocation.tool_call_id) {
            "✓".green().bold()
        } else {
            "·".dimmed()
        };

        format!(
            "  {} {} {} {}",
            marker,
            invocation.tool_name.bold(),
            format!("[{}]", invocation.tool_call_id).dimmed(),
            status
        )
    }

    fn header(title: &str) -> String {
        format!("{}\n{}", title.cyan().bold(), "-".repeat(40).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_summary(&self, report: &TranscriptReport<'_>) -> String {
        Self::format_summary(report)
    }

    fn format_json(&self, messages: &[Message]) -> String {
        Self::format_json(messages)
    }

    fn format_tools(&self, tools: &[ToolListing], json: bool) -> String {
        Self::format_tools(tools, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use toolgate_domain::{ApprovalVerdict, ToolOutput};

    fn transcript() -> Vec<Message> {
        vec![
            Message::user("u1", "What's the weather in Paris?"),
            Message::assistant("a1").with_parts([
                Part::text("Let me check."),
                Part::tool_invocation(
                    ToolInvocation::call("c1", "getWeatherInformation", json!({"city": "Paris"}))
                        .with_output(ToolOutput::text("The weather in Paris is sunny")),
                ),
                Part::tool_invocation(
                    ToolInvocation::call("c2", "getWeatherInformation", json!({"city": "Oslo"}))
                        .with_verdict(ApprovalVerdict::Denied),
                ),
            ]),
        ]
    }

    #[test]
    fn test_summary_lists_messages_and_results() {
        let messages = transcript();
        let resolved = vec!["c1".to_string()];
        let output = ConsoleFormatter::format_summary(&TranscriptReport {
            messages: &messages,
            repaired: &[],
            resolved: &resolved,
        });

        assert!(output.contains("Transcript (2 messages)"));
        assert!(output.contains("What's the weather in Paris?"));
        assert!(output.contains("Let me check."));
        assert!(output.contains("The weather in Paris is sunny"));
        assert!(output.contains("denied (not executed)"));
        assert!(output.contains("Resolved:"));
        assert!(!output.contains("Repaired:"));
    }

    #[test]
    fn test_json_is_wire_format() {
        let messages = transcript();
        let output = ConsoleFormatter::format_json(&messages);
        let parsed: Vec<Message> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, messages);
    }

    #[test]
    fn test_tools_listing() {
        let tools = vec![
            ToolListing {
                name: "getLocalTime".into(),
                description: "Get the local time".into(),
                requires_confirmation: false,
                has_execution: false,
            },
            ToolListing {
                name: "getWeatherInformation".into(),
                description: "Show the weather".into(),
                requires_confirmation: true,
                has_execution: false,
            },
        ];

        let text = ConsoleFormatter::format_tools(&tools, false);
        assert!(text.contains("getLocalTime"));
        assert!(text.contains("(no execution)"));

        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_tools(&tools, true)).unwrap();
        assert_eq!(json[1]["requiresConfirmation"], true);
    }
}
