//! Human approval verdicts.
//!
//! A confirmation-required tool invocation is answered by the human with
//! one of two verdicts. The UI that collects the answer and this crate
//! share two fixed sentinel strings, [`APPROVED`] and [`DENIED`]; they only
//! appear at the wire boundary; inside the domain the verdict is always
//! carried as an [`ApprovalVerdict`].

use serde::{Deserialize, Serialize};

/// Sentinel emitted by the confirmation UI when the human approves.
pub const APPROVED: &str = "Yes, confirmed.";

/// Sentinel emitted by the confirmation UI when the human denies.
pub const DENIED: &str = "No, denied.";

/// The human's yes/no decision on a pending invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalVerdict {
    Approved,
    Denied,
}

impl ApprovalVerdict {
    /// Parse a wire sentinel. Any other string is not a verdict.
    pub fn from_sentinel(value: &str) -> Option<Self> {
        match value {
            APPROVED => Some(Self::Approved),
            DENIED => Some(Self::Denied),
            _ => None,
        }
    }

    /// The sentinel string shared with the confirmation UI.
    pub fn as_sentinel(&self) -> &'static str {
        match self {
            Self::Approved => APPROVED,
            Self::Denied => DENIED,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl std::fmt::Display for ApprovalVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_round_trip() {
        assert_eq!(
            ApprovalVerdict::from_sentinel(APPROVED),
            Some(ApprovalVerdict::Approved)
        );
        assert_eq!(
            ApprovalVerdict::from_sentinel(DENIED),
            Some(ApprovalVerdict::Denied)
        );
        assert_eq!(ApprovalVerdict::Approved.as_sentinel(), APPROVED);
        assert_eq!(ApprovalVerdict::Denied.as_sentinel(), DENIED);
    }

    #[test]
    fn test_other_strings_are_not_verdicts() {
        assert!(ApprovalVerdict::from_sentinel("yes").is_none());
        assert!(ApprovalVerdict::from_sentinel("Yes, confirmed").is_none());
        assert!(ApprovalVerdict::from_sentinel("").is_none());
    }

    #[test]
    fn test_sentinels_are_distinct() {
        assert_ne!(APPROVED, DENIED);
    }
}
