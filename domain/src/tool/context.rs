//! Execution context handed to tool executors.

use crate::session::entities::SessionId;
use crate::transcript::core_message::CoreMessage;
use std::sync::Arc;

/// Everything an executor may need besides its arguments.
///
/// Passed by parameter from the request entry point down into each
/// executor; there is no ambient per-request store.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// Session the request belongs to
    pub session: SessionId,
    /// Full conversation in model-agnostic core form
    pub history: Arc<[CoreMessage]>,
    /// Id of the invocation being executed
    pub tool_call_id: String,
}

impl ExecutionContext {
    pub fn new(
        session: SessionId,
        history: Arc<[CoreMessage]>,
        tool_call_id: impl Into<String>,
    ) -> Self {
        Self {
            session,
            history,
            tool_call_id: tool_call_id.into(),
        }
    }
}
