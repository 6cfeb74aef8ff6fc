//! Infrastructure layer for toolgate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod inference;
pub mod stream;
pub mod tools;
pub mod transcript;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat,
    FileReconcileConfig, FileStreamConfig,
};
pub use inference::OfflineInference;
pub use stream::{ChannelStreamWriter, JsonlStreamWriter};
pub use tools::builtin_registry;
pub use transcript::{TranscriptFileError, load_transcript, save_transcript};
