//! Tool registry
//!
//! The process-wide catalogue of tools, split by kind: auto-executing
//! tools carry their executor inline, confirmation-required tools get an
//! entry in the [`ExecutionTable`] holding the executor to run after a
//! human approved the call.

pub mod registry;

pub use registry::{
    ExecutionTable, RegistryError, RegistryStats, ToolDescriptor, ToolKind, ToolRegistry,
    ToolRegistryBuilder,
};
