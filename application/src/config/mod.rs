//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`ReconcileParams`]: executor failure policy and argument validation

pub mod reconcile_params;

pub use reconcile_params::{FailurePolicy, ReconcileParams};
