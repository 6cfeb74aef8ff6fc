//! Offline inference adapter.
//!
//! Used by the CLI, which reconciles transcripts without a model attached:
//! the reconciled history is logged and the turn ends without further
//! output.

use async_trait::async_trait;
use toolgate_application::{GatewayError, InferencePort, ResultStreamWriter};
use toolgate_domain::{CoreMessage, ToolSpec};
use tracing::{debug, info};

/// Inference port that never calls a model
#[derive(Debug, Clone, Default)]
pub struct OfflineInference;

impl OfflineInference {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InferencePort for OfflineInference {
    async fn respond(
        &self,
        history: &[CoreMessage],
        tools: &ToolSpec,
        _writer: &dyn ResultStreamWriter,
    ) -> Result<(), GatewayError> {
        info!(
            messages = history.len(),
            tools = tools.len(),
            "No model attached; skipping inference"
        );
        for message in history {
            debug!(role = ?message.role, parts = message.content.len(), "Core message");
        }
        Ok(())
    }
}
