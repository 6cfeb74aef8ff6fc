//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod inference;
pub mod result_stream;
pub mod tool_catalog;
pub mod tool_handler;
