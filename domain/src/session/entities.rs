//! Session domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifier of the conversation session a request belongs to (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session id, rejecting empty or whitespace-only input
    pub fn parse(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::EmptySessionId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SessionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Context built by the request entry point and passed explicitly down to
/// every use case and tool executor.
///
/// A request without a session cannot be reconciled.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub session: Option<SessionId>,
}

impl RequestContext {
    pub fn new(session: SessionId) -> Self {
        Self {
            session: Some(session),
        }
    }

    /// A context with no active session
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&SessionId> {
        self.session.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_parse() {
        let id = SessionId::parse("chat-42").unwrap();
        assert_eq!(id.as_str(), "chat-42");
        assert_eq!(id.to_string(), "chat-42");
    }

    #[test]
    fn test_session_id_rejects_blank() {
        assert_eq!(SessionId::parse(""), Err(DomainError::EmptySessionId));
        assert_eq!(SessionId::parse("   "), Err(DomainError::EmptySessionId));
        assert!("".parse::<SessionId>().is_err());
    }

    #[test]
    fn test_request_context() {
        let ctx = RequestContext::new(SessionId::parse("s1").unwrap());
        assert_eq!(ctx.session().map(|s| s.as_str()), Some("s1"));
        assert!(RequestContext::anonymous().session().is_none());
    }
}
