//! Reconcile Transcript use case.
//!
//! Turns human verdicts recorded in a transcript into final tool results.
//!
//! # Flow
//!
//! ```text
//! transcript
//!   │
//!   ├─ repair_transcript()          stuck `call` parts → failure note
//!   │
//!   └─ last message, per part (concurrently, joined by position)
//!        ├─ not a tool invocation             → unchanged
//!        ├─ tool not gated by execution table → unchanged
//!        ├─ state != result / already output  → unchanged
//!        ├─ Approved → run executor           → Resolved(output) + event
//!        └─ Denied   → denial message         → Resolved(denial) + event
//! ```
//!
//! Only the last message is inspected; earlier ones are assumed already
//! reconciled. Message order, part order and every untouched part are
//! preserved.

use crate::config::{FailurePolicy, ReconcileParams};
use crate::ports::result_stream::ResultStreamWriter;
use crate::ports::tool_catalog::ToolCatalogPort;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use thiserror::Error;
use toolgate_domain::{
    ApprovalVerdict, CoreMessage, ExecutionContext, Message, Part, SchemaValidator, SessionId,
    StreamEvent, ToolError, ToolInvocation, ToolOutput, ToolValidator, duplicate_tool_call_ids,
    repair_transcript, to_core_messages,
};
use tracing::{debug, info, warn};

/// Result recorded for a denied invocation
pub const DENIAL_MESSAGE: &str = "Error: User denied access to tool execution";

/// Result recorded when an approved tool has no registered executor
pub const MISSING_EXECUTOR_MESSAGE: &str = "Error: No execute function found on tool";

/// Errors that abort a reconciliation
#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("No active session for this request")]
    MissingSession,

    #[error("Tool '{tool_name}' failed for call {tool_call_id}: {source}")]
    ExecutorFailed {
        tool_call_id: String,
        tool_name: String,
        #[source]
        source: ToolError,
    },

    #[error("Inference failed: {0}")]
    Inference(#[from] crate::ports::inference::GatewayError),
}

/// Output of a reconciliation
#[derive(Debug, Clone)]
pub struct ReconcileOutput {
    /// The rewritten transcript
    pub messages: Vec<Message>,
    /// Ids of messages rewritten by repair
    pub repaired: Vec<String>,
    /// Tool call ids resolved during this reconciliation, in part order
    pub resolved: Vec<String>,
}

/// How a single part came out of reconciliation
struct PartResolution {
    part: Part,
    resolved: Option<String>,
    failure: Option<(String, String, ToolError)>,
}

impl PartResolution {
    fn unchanged(part: Part) -> Self {
        Self {
            part,
            resolved: None,
            failure: None,
        }
    }
}

/// Use case for repairing a transcript and resolving approved or denied
/// invocations in its last message.
pub struct ReconcileTranscriptUseCase<T: ToolCatalogPort> {
    catalog: Arc<T>,
    params: ReconcileParams,
}

impl<T: ToolCatalogPort> ReconcileTranscriptUseCase<T> {
    pub fn new(catalog: Arc<T>) -> Self {
        Self {
            catalog,
            params: ReconcileParams::default(),
        }
    }

    pub fn with_params(mut self, params: ReconcileParams) -> Self {
        self.params = params;
        self
    }

    /// Repair, then reconcile the last message.
    ///
    /// Every stream event for a resolved part is written before this
    /// returns. Under [`FailurePolicy::Abort`] the first executor failure
    /// (in part order) is returned once all siblings have settled.
    pub async fn execute(
        &self,
        session: &SessionId,
        messages: Vec<Message>,
        writer: &dyn ResultStreamWriter,
    ) -> Result<ReconcileOutput, ReconcileError> {
        let repair = repair_transcript(messages);
        if !repair.is_clean() {
            info!(
                session = %session,
                count = repair.repaired.len(),
                "Repaired stuck tool invocations"
            );
        }

        let duplicates = duplicate_tool_call_ids(&repair.messages);
        if !duplicates.is_empty() {
            warn!(session = %session, ids = ?duplicates, "Transcript has duplicate tool call ids");
        }

        let (messages, resolved) = self.reconcile_last(session, repair.messages, writer).await?;

        Ok(ReconcileOutput {
            messages,
            repaired: repair.repaired,
            resolved,
        })
    }

    /// Reconcile the last message of an already repaired transcript.
    pub async fn reconcile_last(
        &self,
        session: &SessionId,
        mut messages: Vec<Message>,
        writer: &dyn ResultStreamWriter,
    ) -> Result<(Vec<Message>, Vec<String>), ReconcileError> {
        if messages.last().is_none_or(|m| m.parts.is_empty()) {
            return Ok((messages, Vec::new()));
        }

        let history: Arc<[CoreMessage]> = to_core_messages(&messages).into();

        let Some(last) = messages.last_mut() else {
            return Ok((messages, Vec::new()));
        };
        let parts = std::mem::take(&mut last.parts);

        let resolutions = futures::future::join_all(
            parts
                .into_iter()
                .map(|part| self.resolve_part(part, session, &history, writer)),
        )
        .await;

        let mut resolved = Vec::new();
        let mut first_failure = None;
        last.parts = resolutions
            .into_iter()
            .map(|resolution| {
                if let Some(id) = resolution.resolved {
                    resolved.push(id);
                }
                if first_failure.is_none() {
                    first_failure = resolution.failure;
                }
                resolution.part
            })
            .collect();

        if let Some((tool_call_id, tool_name, source)) = first_failure {
            return Err(ReconcileError::ExecutorFailed {
                tool_call_id,
                tool_name,
                source,
            });
        }

        debug!(session = %session, resolved = resolved.len(), "Reconciled last message");
        Ok((messages, resolved))
    }

    async fn resolve_part(
        &self,
        part: Part,
        session: &SessionId,
        history: &Arc<[CoreMessage]>,
        writer: &dyn ResultStreamWriter,
    ) -> PartResolution {
        let invocation = match part {
            Part::ToolInvocation { tool_invocation } => tool_invocation,
            other => return PartResolution::unchanged(other),
        };

        // Auto-executing or unknown tools were handled by the inference step
        if !self.catalog.requires_confirmation(&invocation.tool_name) {
            return PartResolution::unchanged(Part::tool_invocation(invocation));
        }

        let Some(verdict) = invocation.pending_verdict() else {
            return PartResolution::unchanged(Part::tool_invocation(invocation));
        };

        let result = match verdict {
            ApprovalVerdict::Denied => {
                info!(
                    tool = %invocation.tool_name,
                    tool_call_id = %invocation.tool_call_id,
                    "Tool invocation denied"
                );
                Ok(ToolOutput::text(DENIAL_MESSAGE))
            }
            ApprovalVerdict::Approved => self.run_approved(&invocation, session, history).await,
        };

        let output = match result {
            Ok(output) => output,
            Err(error) => {
                warn!(
                    tool = %invocation.tool_name,
                    tool_call_id = %invocation.tool_call_id,
                    error = %error,
                    "Approved tool failed"
                );
                match self.params.failure_policy {
                    FailurePolicy::Isolate => ToolOutput::from_error(&error),
                    FailurePolicy::Abort => {
                        let failure = Some((
                            invocation.tool_call_id.clone(),
                            invocation.tool_name.clone(),
                            error,
                        ));
                        return PartResolution {
                            part: Part::tool_invocation(invocation),
                            resolved: None,
                            failure,
                        };
                    }
                }
            }
        };

        let tool_call_id = invocation.tool_call_id.clone();
        writer.write(StreamEvent::tool_result(&tool_call_id, output.clone()));

        PartResolution {
            part: Part::tool_invocation(invocation.resolve(output)),
            resolved: Some(tool_call_id),
            failure: None,
        }
    }

    async fn run_approved(
        &self,
        invocation: &ToolInvocation,
        session: &SessionId,
        history: &Arc<[CoreMessage]>,
    ) -> Result<ToolOutput, ToolError> {
        let Some(executor) = self.catalog.execution(&invocation.tool_name) else {
            warn!(tool = %invocation.tool_name, "No executor registered for approved tool");
            return Ok(ToolOutput::text(MISSING_EXECUTOR_MESSAGE));
        };

        if self.params.validate_arguments
            && let Some(definition) = self.catalog.get_tool(&invocation.tool_name)
        {
            SchemaValidator
                .validate(&invocation.args, definition)
                .map_err(ToolError::invalid_argument)?;
        }

        debug!(
            tool = %invocation.tool_name,
            tool_call_id = %invocation.tool_call_id,
            "Executing approved tool"
        );

        let ctx = ExecutionContext::new(
            session.clone(),
            Arc::clone(history),
            invocation.tool_call_id.clone(),
        );

        match AssertUnwindSafe(executor.call(invocation.args.clone(), ctx))
            .catch_unwind()
            .await
        {
            Ok(result) => result,
            Err(payload) => Err(ToolError::panicked(panic_message(payload.as_ref()))),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
