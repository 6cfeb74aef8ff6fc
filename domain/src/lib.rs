//! Domain layer for toolgate
//!
//! This crate contains the core types and pure logic of the tool-approval
//! gate. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Transcript
//!
//! A transcript is the ordered list of [`Message`]s of one conversation.
//! Assistant messages carry [`Part`]s, some of which are
//! [`ToolInvocation`]s produced by the inference step.
//!
//! ## Approval Gate
//!
//! Tools marked as confirmation-required are not executed by the inference
//! step. Their invocations wait until a human answers with an
//! [`ApprovalVerdict`], which is recorded as a
//! [`ToolOutcome::PendingApproval`]. Reconciliation later replaces the
//! verdict with a [`ToolOutcome::Resolved`] output.
//!
//! ## Repair
//!
//! [`repair_transcript`] rewrites invocations left stuck in the `call`
//! state by a crashed execution into a plain failure note.

pub mod approval;
pub mod config;
pub mod core;
pub mod session;
pub mod tool;
pub mod transcript;

// Re-export commonly used types
pub use approval::{APPROVED, ApprovalVerdict, DENIED};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use session::{
    entities::{RequestContext, SessionId},
    stream::StreamEvent,
};
pub use tool::{
    context::ExecutionContext,
    entities::{ToolDefinition, ToolSpec},
    traits::{SchemaValidator, ToolValidator},
    value_objects::{ToolError, ToolOutput},
};
pub use transcript::{
    core_message::{CoreContent, CoreMessage, CoreRole, to_core_messages},
    duplicate_tool_call_ids,
    invocation::{InvocationState, ToolInvocation, ToolOutcome},
    message::{Message, Role},
    part::Part,
    repair::{RepairOutcome, TOOL_FAILURE_NOTE, repair_transcript},
};
