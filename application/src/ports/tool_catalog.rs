//! Tool catalog port
//!
//! Defines how the application layer sees the process-wide tool registry:
//! the catalogue offered to the inference step, which tools are gated
//! behind human approval, and the executors to run once they are approved.

use super::tool_handler::ToolHandler;
use std::sync::Arc;
use toolgate_domain::{ToolDefinition, ToolSpec};

/// Port for the read-only tool registry
///
/// Built once at process start and shared by reference; implementations
/// must be immutable after construction so concurrent reads need no
/// synchronization. The concrete registry is
/// [`ToolRegistry`](crate::tools::ToolRegistry); the infrastructure layer
/// only assembles the built-in one.
pub trait ToolCatalogPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().get(name).is_some()
    }

    /// Get the definition of a specific tool
    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get(name)
    }

    /// Whether `name` has an entry in the execution table, i.e. must wait
    /// for a human verdict before running
    fn requires_confirmation(&self, name: &str) -> bool;

    /// Post-approval executor for a confirmation-required tool
    fn execution(&self, name: &str) -> Option<Arc<dyn ToolHandler>>;

    /// Inline executor of an auto-executing tool
    fn auto_executor(&self, name: &str) -> Option<Arc<dyn ToolHandler>>;
}
