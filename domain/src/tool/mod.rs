//! Tool domain module
//!
//! This module defines the pure side of the tool system: what a tool looks
//! like to the inference step, how its arguments are validated, and what an
//! execution produces.
//!
//! # Overview
//!
//! ```text
//! ┌────────────────┐    ┌────────────────┐    ┌────────────────┐
//! │ ToolDefinition │───▶│ ToolInvocation │───▶│ ToolOutput     │
//! │ (catalogue)    │    │ (transcript)   │    │ (result)       │
//! └────────────────┘    └────────────────┘    └────────────────┘
//! ```
//!
//! Whether a tool runs inline or waits for a human is not a property of the
//! definition. It is decided when the application layer builds its tool
//! registry, from the tool kind each descriptor declares.
//!
//! # Key Types
//!
//! - [`ToolDefinition`]: name, description and JSON parameter schema
//! - [`ToolSpec`]: catalogue of definitions
//! - [`ToolValidator`]: pure argument validation against the schema
//! - [`ToolOutput`] / [`ToolError`]: execution outcome
//! - [`ExecutionContext`]: what an executor receives besides its arguments

pub mod context;
pub mod entities;
pub mod traits;
pub mod value_objects;

pub use context::ExecutionContext;
pub use entities::{ToolDefinition, ToolSpec};
pub use traits::{SchemaValidator, ToolValidator};
pub use value_objects::{ToolError, ToolOutput};
