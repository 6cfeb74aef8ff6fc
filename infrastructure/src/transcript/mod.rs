//! Transcript persistence.

mod file;

pub use file::{TranscriptFileError, load_transcript, save_transcript};
