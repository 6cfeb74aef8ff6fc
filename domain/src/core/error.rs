//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Session id cannot be empty")]
    EmptySessionId,

    #[error("Tool name cannot be empty")]
    EmptyToolName,
}
