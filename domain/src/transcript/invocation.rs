//! Tool invocations embedded in assistant messages.
//!
//! The `result` slot of an invocation holds one of two very different
//! things over its lifetime:
//!
//! ```text
//! call ──(human answers)──▶ result: PendingApproval(verdict)
//!                                      │
//!                          (reconciler executes / denies)
//!                                      ▼
//!                            result: Resolved(output)
//! ```
//!
//! [`ToolOutcome`] keeps the two apart as explicit variants in memory. The
//! wire keeps the shape confirmation UIs already speak: a pending verdict is
//! written as its shared sentinel string and a resolved output as the plain
//! output value, so results that are already final pass through unchanged.

use crate::approval::ApprovalVerdict;
use crate::tool::value_objects::ToolOutput;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Lifecycle state of an invocation as reported by the inference step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvocationState {
    /// Arguments are still streaming in
    PartialCall,
    /// The call is complete and waiting for a result
    Call,
    /// A result (verdict or output) has been recorded
    Result,
}

/// What the `result` slot of an invocation currently holds
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    /// The human decided; the tool has not run yet
    PendingApproval(ApprovalVerdict),
    /// Final output; must never be recomputed
    Resolved(ToolOutput),
}

impl ToolOutcome {
    pub fn verdict(&self) -> Option<ApprovalVerdict> {
        match self {
            Self::PendingApproval(verdict) => Some(*verdict),
            Self::Resolved(_) => None,
        }
    }

    pub fn output(&self) -> Option<&ToolOutput> {
        match self {
            Self::PendingApproval(_) => None,
            Self::Resolved(output) => Some(output),
        }
    }

    /// Decode a raw wire value: a sentinel string is a pending verdict,
    /// anything else is an already resolved output.
    pub fn from_wire(value: Value) -> Self {
        if let Value::String(s) = &value
            && let Some(verdict) = ApprovalVerdict::from_sentinel(s)
        {
            return Self::PendingApproval(verdict);
        }
        Self::Resolved(ToolOutput::from_wire(value))
    }
}

impl Serialize for ToolOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::PendingApproval(verdict) => serializer.serialize_str(verdict.as_sentinel()),
            Self::Resolved(output) => output.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ToolOutcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_wire)
    }
}

/// A tool invocation part's payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    /// Unique per invocation within a transcript
    pub tool_call_id: String,
    pub tool_name: String,
    #[serde(default)]
    pub args: Value,
    pub state: InvocationState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ToolOutcome>,
}

impl ToolInvocation {
    /// A freshly issued call with no result yet
    pub fn call(tool_call_id: impl Into<String>, tool_name: impl Into<String>, args: Value) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            args,
            state: InvocationState::Call,
            result: None,
        }
    }

    /// Record the human's answer
    pub fn with_verdict(mut self, verdict: ApprovalVerdict) -> Self {
        self.state = InvocationState::Result;
        self.result = Some(ToolOutcome::PendingApproval(verdict));
        self
    }

    /// Record a final output
    pub fn with_output(mut self, output: ToolOutput) -> Self {
        self.state = InvocationState::Result;
        self.result = Some(ToolOutcome::Resolved(output));
        self
    }

    /// Replace only the result with a final output; all other fields are kept.
    pub fn resolve(mut self, output: ToolOutput) -> Self {
        self.result = Some(ToolOutcome::Resolved(output));
        self
    }

    /// Left in `call` with nothing recorded, typically by a crashed execution
    pub fn is_stuck(&self) -> bool {
        self.state == InvocationState::Call && self.result.is_none()
    }

    /// The human's verdict, if one is recorded and still awaiting execution
    pub fn pending_verdict(&self) -> Option<ApprovalVerdict> {
        if self.state != InvocationState::Result {
            return None;
        }
        self.result.as_ref().and_then(|r| r.verdict())
    }

    pub fn output(&self) -> Option<&ToolOutput> {
        self.result.as_ref().and_then(|r| r.output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approval::{APPROVED, DENIED};
    use serde_json::json;

    #[test]
    fn test_lifecycle() {
        let inv = ToolInvocation::call("c1", "getWeatherInformation", json!({"city": "Paris"}));
        assert!(inv.is_stuck());
        assert!(inv.pending_verdict().is_none());

        let inv = inv.with_verdict(ApprovalVerdict::Approved);
        assert!(!inv.is_stuck());
        assert_eq!(inv.pending_verdict(), Some(ApprovalVerdict::Approved));

        let inv = inv.resolve(ToolOutput::text("sunny"));
        assert!(inv.pending_verdict().is_none());
        assert_eq!(inv.output().and_then(|o| o.as_text()), Some("sunny"));
        assert_eq!(inv.state, InvocationState::Result);
        assert_eq!(inv.tool_call_id, "c1");
    }

    #[test]
    fn test_verdict_ignored_outside_result_state() {
        let mut inv = ToolInvocation::call("c1", "t", Value::Null);
        inv.result = Some(ToolOutcome::PendingApproval(ApprovalVerdict::Approved));
        assert!(inv.pending_verdict().is_none());
    }

    #[test]
    fn test_decode_sentinel_strings() {
        let inv: ToolInvocation = serde_json::from_value(json!({
            "toolCallId": "c1",
            "toolName": "getWeatherInformation",
            "args": {"city": "Paris"},
            "state": "result",
            "result": APPROVED,
        }))
        .unwrap();
        assert_eq!(inv.pending_verdict(), Some(ApprovalVerdict::Approved));

        let outcome: ToolOutcome = serde_json::from_value(json!(DENIED)).unwrap();
        assert_eq!(outcome, ToolOutcome::PendingApproval(ApprovalVerdict::Denied));
    }

    #[test]
    fn test_decode_bare_values_as_resolved() {
        let outcome: ToolOutcome = serde_json::from_value(json!("10am")).unwrap();
        assert_eq!(outcome, ToolOutcome::Resolved(ToolOutput::text("10am")));

        let outcome: ToolOutcome = serde_json::from_value(json!({"status": "ok"})).unwrap();
        assert_eq!(
            outcome,
            ToolOutcome::Resolved(ToolOutput::json(json!({"status": "ok"})))
        );
    }

    #[test]
    fn test_output_objects_never_decode_as_verdicts() {
        let value = json!({"status": "pending-approval", "verdict": "approved"});
        let outcome: ToolOutcome = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(outcome, ToolOutcome::Resolved(ToolOutput::json(value)));
        assert!(outcome.verdict().is_none());
    }

    #[test]
    fn test_encoding_matches_wire_values() {
        let outcome = ToolOutcome::PendingApproval(ApprovalVerdict::Denied);
        assert_eq!(serde_json::to_value(&outcome).unwrap(), json!(DENIED));

        let outcome = ToolOutcome::Resolved(ToolOutput::text("10am"));
        assert_eq!(serde_json::to_string(&outcome).unwrap(), r#""10am""#);

        let outcome = ToolOutcome::Resolved(ToolOutput::raw_markup("<b>sun</b>"));
        let wire = serde_json::to_value(&outcome).unwrap();
        assert_eq!(wire, json!({"type": "raw-markup", "content": "<b>sun</b>"}));
        assert_eq!(serde_json::from_value::<ToolOutcome>(wire).unwrap(), outcome);
    }

    #[test]
    fn test_resolved_part_reencodes_unchanged() {
        let raw = r#"{"toolCallId":"c2","toolName":"getLocalTime","args":{},"state":"result","result":"10am"}"#;
        let inv: ToolInvocation = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&inv).unwrap(), raw);
    }

    #[test]
    fn test_missing_result_and_args() {
        let inv: ToolInvocation = serde_json::from_value(json!({
            "toolCallId": "x",
            "toolName": "t",
            "state": "call",
        }))
        .unwrap();
        assert!(inv.is_stuck());
        assert_eq!(inv.args, Value::Null);

        let wire = serde_json::to_value(&inv).unwrap();
        assert!(wire.get("result").is_none());
    }

    #[test]
    fn test_partial_call_state() {
        let state: InvocationState = serde_json::from_value(json!("partial-call")).unwrap();
        assert_eq!(state, InvocationState::PartialCall);
    }
}
