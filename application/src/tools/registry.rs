//! Tool Registry
//!
//! The [`ToolRegistry`] is built once at process start from a list of
//! [`ToolDescriptor`]s plus the post-approval executions, and implements
//! [`ToolCatalogPort`].
//!
//! # Usage
//!
//! ```ignore
//! let registry = ToolRegistry::builder()
//!     .tool(ToolDescriptor::confirmation_required(weather))
//!     .tool(ToolDescriptor::auto(local_time, local_time_handler))
//!     .execution("getWeatherInformation", weather_handler)
//!     .build()?;
//!
//! assert!(registry.requires_confirmation("getWeatherInformation"));
//! assert!(!registry.requires_confirmation("getLocalTime"));
//! ```
//!
//! # Build rules
//!
//! - tool names are unique and non-empty
//! - an execution may only target a registered confirmation-required tool,
//!   at most once
//! - a confirmation-required tool without an execution is accepted with a
//!   warning; approving it resolves to the "no execute function" error

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::ports::tool_catalog::ToolCatalogPort;
use crate::ports::tool_handler::ToolHandler;
use thiserror::Error;
use toolgate_domain::{DomainError, ToolDefinition, ToolSpec};

/// Errors raised while building a registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Tool '{0}' is registered more than once")]
    DuplicateTool(String),

    #[error("Execution registered for unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Tool '{0}' executes automatically and cannot have a post-approval execution")]
    NotConfirmationRequired(String),

    #[error("Execution for tool '{0}' is registered more than once")]
    DuplicateExecution(String),
}

/// How a tool is run
#[derive(Clone)]
pub enum ToolKind {
    /// Executed inline by the inference step
    AutoExecuting { executor: Arc<dyn ToolHandler> },
    /// Suspended until a human approves; executed by the reconciler
    ConfirmationRequired,
}

impl fmt::Debug for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AutoExecuting { .. } => f.write_str("AutoExecuting"),
            Self::ConfirmationRequired => f.write_str("ConfirmationRequired"),
        }
    }
}

/// A tool as declared to the registry builder
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub definition: ToolDefinition,
    pub kind: ToolKind,
}

impl ToolDescriptor {
    pub fn auto(definition: ToolDefinition, executor: Arc<dyn ToolHandler>) -> Self {
        Self {
            definition,
            kind: ToolKind::AutoExecuting { executor },
        }
    }

    pub fn confirmation_required(definition: ToolDefinition) -> Self {
        Self {
            definition,
            kind: ToolKind::ConfirmationRequired,
        }
    }

    pub fn requires_confirmation(&self) -> bool {
        matches!(self.kind, ToolKind::ConfirmationRequired)
    }
}

/// Post-approval executors, keyed by tool name.
///
/// Holds an entry for every confirmation-required tool; the entry is empty
/// when no execution was registered.
#[derive(Clone, Default)]
pub struct ExecutionTable {
    entries: HashMap<String, Option<Arc<dyn ToolHandler>>>,
}

impl ExecutionTable {
    /// Whether `name` is gated behind approval
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The executor registered for `name`, if any
    pub fn executor(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
        self.entries.get(name).and_then(|e| e.clone())
    }

    pub fn has_executor(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(|e| e.is_some())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ExecutionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<(&str, bool)> = self
            .entries
            .iter()
            .map(|(name, e)| (name.as_str(), e.is_some()))
            .collect();
        names.sort_unstable();
        f.debug_map().entries(names).finish()
    }
}

/// Builder for [`ToolRegistry`]
#[derive(Default)]
pub struct ToolRegistryBuilder {
    descriptors: Vec<ToolDescriptor>,
    executions: Vec<(String, Arc<dyn ToolHandler>)>,
}

impl ToolRegistryBuilder {
    /// Declare a tool
    pub fn tool(mut self, descriptor: ToolDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Register the post-approval executor of a confirmation-required tool
    pub fn execution(mut self, name: impl Into<String>, executor: Arc<dyn ToolHandler>) -> Self {
        self.executions.push((name.into(), executor));
        self
    }

    /// Resolve the declarations into an immutable registry
    pub fn build(self) -> Result<ToolRegistry, RegistryError> {
        let mut tool_spec = ToolSpec::new();
        let mut auto = HashMap::new();
        let mut entries: HashMap<String, Option<Arc<dyn ToolHandler>>> = HashMap::new();

        for descriptor in self.descriptors {
            let name = descriptor.definition.name.clone();
            if name.trim().is_empty() {
                return Err(DomainError::EmptyToolName.into());
            }
            if tool_spec.contains(&name) {
                return Err(RegistryError::DuplicateTool(name));
            }

            match descriptor.kind {
                ToolKind::AutoExecuting { executor } => {
                    auto.insert(name.clone(), executor);
                }
                ToolKind::ConfirmationRequired => {
                    entries.insert(name.clone(), None);
                }
            }

            tracing::debug!(tool = %name, "Registered tool");
            tool_spec = tool_spec.register(descriptor.definition);
        }

        for (name, executor) in self.executions {
            match entries.get_mut(&name) {
                Some(slot) if slot.is_none() => *slot = Some(executor),
                Some(_) => return Err(RegistryError::DuplicateExecution(name)),
                None if auto.contains_key(&name) => {
                    return Err(RegistryError::NotConfirmationRequired(name));
                }
                None => return Err(RegistryError::UnknownTool(name)),
            }
        }

        for (name, slot) in &entries {
            if slot.is_none() {
                tracing::warn!(
                    tool = %name,
                    "Confirmation-required tool has no execution; approvals will fail"
                );
            }
        }

        Ok(ToolRegistry {
            tool_spec,
            auto,
            executions: ExecutionTable { entries },
        })
    }
}

/// Immutable tool registry
///
/// Shared by `Arc` after construction; all lookups are plain reads.
#[derive(Clone)]
pub struct ToolRegistry {
    tool_spec: ToolSpec,
    auto: HashMap<String, Arc<dyn ToolHandler>>,
    executions: ExecutionTable,
}

impl ToolRegistry {
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::default()
    }

    pub fn execution_table(&self) -> &ExecutionTable {
        &self.executions
    }

    /// Get statistics about registered tools
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            total_tools: self.tool_spec.len(),
            auto_executing: self.auto.len(),
            confirmation_required: self.executions.len(),
            missing_executions: self
                .executions
                .entries
                .values()
                .filter(|e| e.is_none())
                .count(),
        }
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut auto: Vec<&str> = self.auto.keys().map(|k| k.as_str()).collect();
        auto.sort_unstable();
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_spec.names().collect::<Vec<_>>())
            .field("auto", &auto)
            .field("executions", &self.executions)
            .finish()
    }
}

/// Statistics about the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    pub total_tools: usize,
    pub auto_executing: usize,
    pub confirmation_required: usize,
    pub missing_executions: usize,
}

impl ToolCatalogPort for ToolRegistry {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    fn requires_confirmation(&self, name: &str) -> bool {
        self.executions.contains(name)
    }

    fn execution(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
        self.executions.executor(name)
    }

    fn auto_executor(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
        self.auto.get(name).cloned()
    }
}
