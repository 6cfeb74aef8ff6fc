//! Inference port
//!
//! The inference call is an external collaborator: it receives the
//! reconciled conversation and the tool catalogue, and streams its answer
//! onto the same side channel the reconciler writes to.

use super::result_stream::ResultStreamWriter;
use async_trait::async_trait;
use thiserror::Error;
use toolgate_domain::{CoreMessage, ToolSpec};

/// Errors that can occur while calling the inference step
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Port for handing a reconciled conversation to the model
///
/// Implementations (adapters) live outside this workspace's core: an HTTP
/// client for a hosted model, or a scripted fake in tests.
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Continue the conversation, streaming output through `writer`
    async fn respond(
        &self,
        history: &[CoreMessage],
        tools: &ToolSpec,
        writer: &dyn ResultStreamWriter,
    ) -> Result<(), GatewayError>;
}
