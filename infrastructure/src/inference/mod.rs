//! Inference adapters.

mod offline;

pub use offline::OfflineInference;
