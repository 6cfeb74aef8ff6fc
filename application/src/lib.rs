//! Application layer for toolgate
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod tools;
pub mod use_cases;

// Re-export commonly used types
pub use config::{FailurePolicy, ReconcileParams};
pub use ports::{
    inference::{GatewayError, InferencePort},
    result_stream::{NoResultStream, ResultStreamWriter},
    tool_catalog::ToolCatalogPort,
    tool_handler::{FnToolHandler, ToolHandler, handler_fn},
};
pub use tools::{
    ExecutionTable, RegistryError, RegistryStats, ToolDescriptor, ToolKind, ToolRegistry,
    ToolRegistryBuilder,
};
pub use use_cases::handle_chat::HandleChatUseCase;
pub use use_cases::reconcile::{
    DENIAL_MESSAGE, MISSING_EXECUTOR_MESSAGE, ReconcileError, ReconcileOutput,
    ReconcileTranscriptUseCase,
};
