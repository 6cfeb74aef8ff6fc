//! Presentation layer for toolgate
//!
//! This crate contains CLI definitions and output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, FailurePolicyArg, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, ToolListing, TranscriptReport};
