//! JSON transcript files.
//!
//! A transcript file holds either a bare array of messages or a chat request
//! body of the form `{ "messages": [...] }`. Saving always writes the bare
//! array, pretty-printed.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use toolgate_domain::Message;
use tracing::debug;

/// Errors reading or writing transcript files
#[derive(Error, Debug)]
pub enum TranscriptFileError {
    #[error("Could not read transcript {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write transcript {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid transcript {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct RequestBody {
    messages: Vec<Message>,
}

/// Parse either document shape, keeping serde_json's position in errors.
fn parse_document(content: &str) -> Result<Vec<Message>, serde_json::Error> {
    if content.trim_start().starts_with('[') {
        serde_json::from_str(content)
    } else {
        serde_json::from_str::<RequestBody>(content).map(|body| body.messages)
    }
}

/// Read a transcript from a JSON file
pub fn load_transcript(path: &Path) -> Result<Vec<Message>, TranscriptFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| TranscriptFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let messages = parse_document(&content).map_err(|source| TranscriptFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), messages = messages.len(), "Loaded transcript");
    Ok(messages)
}

/// Write a transcript as a pretty-printed JSON array
pub fn save_transcript(path: &Path, messages: &[Message]) -> Result<(), TranscriptFileError> {
    let json = serde_json::to_string_pretty(messages).map_err(|source| {
        TranscriptFileError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    std::fs::write(path, json).map_err(|source| TranscriptFileError::Write {
        path: path.to_path_buf(),
        source,
    })
}
