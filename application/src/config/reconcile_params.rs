//! Reconciliation parameters: use case behavior control.
//!
//! [`ReconcileParams`] groups the static parameters that control
//! [`ReconcileTranscriptUseCase`](crate::use_cases::reconcile::ReconcileTranscriptUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// What happens when an approved executor fails (returns an error or panics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// The failing part resolves to an error string; siblings are unaffected.
    #[default]
    Isolate,
    /// The whole reconciliation fails once every sibling has settled.
    Abort,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &str {
        match self {
            FailurePolicy::Isolate => "isolate",
            FailurePolicy::Abort => "abort",
        }
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "isolate" => Ok(FailurePolicy::Isolate),
            "abort" => Ok(FailurePolicy::Abort),
            other => Err(format!(
                "Invalid failure policy: '{}'. Valid options: isolate, abort",
                other
            )),
        }
    }
}

/// Reconciliation control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileParams {
    /// Executor failure handling.
    pub failure_policy: FailurePolicy,
    /// Check approved arguments against the tool's schema before executing.
    pub validate_arguments: bool,
}

impl Default for ReconcileParams {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::Isolate,
            validate_arguments: true,
        }
    }
}

impl ReconcileParams {
    // ==================== Builder Methods ====================

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_validate_arguments(mut self, validate: bool) -> Self {
        self.validate_arguments = validate;
        self
    }
}
