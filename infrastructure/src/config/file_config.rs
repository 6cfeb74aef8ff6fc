//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain and application types
//! where appropriate.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use toolgate_application::{FailurePolicy, ReconcileParams};

// Re-export OutputFormat from domain for convenience
pub use toolgate_domain::OutputFormat as FileOutputFormat;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("stream.events_file cannot be empty")]
    EmptyEventsFile,
}

/// Raw reconciliation configuration from TOML (`[reconcile]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReconcileConfig {
    /// `"isolate"` or `"abort"`
    pub failure_policy: FailurePolicy,
    /// Check approved arguments against the tool schema
    pub validate_arguments: bool,
}

impl Default for FileReconcileConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::Isolate,
            validate_arguments: true,
        }
    }
}

impl FileReconcileConfig {
    pub fn to_params(&self) -> ReconcileParams {
        ReconcileParams::default()
            .with_failure_policy(self.failure_policy)
            .with_validate_arguments(self.validate_arguments)
    }
}

/// Raw result stream configuration from TOML (`[stream]` section)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStreamConfig {
    /// JSONL file receiving result events; stderr when unset
    pub events_file: Option<PathBuf>,
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<FileOutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Reconciliation settings
    pub reconcile: FileReconcileConfig,
    /// Result stream settings
    pub stream: FileStreamConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(path) = &self.stream.events_file
            && path.as_os_str().is_empty()
        {
            return Err(ConfigValidationError::EmptyEventsFile);
        }

        Ok(())
    }
}
