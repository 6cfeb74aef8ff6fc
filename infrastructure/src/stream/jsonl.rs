//! JSONL file writer for result stream events.
//!
//! Each [`StreamEvent`] is serialized as a single JSON line carrying its
//! `type` plus a `timestamp`, appended to a file (or stderr) via a buffered
//! writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use toolgate_application::ResultStreamWriter;
use toolgate_domain::StreamEvent;
use tracing::warn;

/// Result stream writer that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<_>>`. Flushes after every event and
/// on `Drop`.
pub struct JsonlStreamWriter {
    writer: Mutex<BufWriter<Box<dyn Write + Send>>>,
    path: Option<PathBuf>,
}

impl JsonlStreamWriter {
    /// Create a writer for the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create stream output directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create stream output file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(Box::new(file))),
            path: Some(path.to_path_buf()),
        })
    }

    /// Create a writer on standard error.
    pub fn stderr() -> Self {
        Self {
            writer: Mutex::new(BufWriter::new(Box::new(std::io::stderr()))),
            path: None,
        }
    }

    /// Get the path to the output file, `None` for stderr.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl ResultStreamWriter for JsonlStreamWriter {
    fn write(&self, event: StreamEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut record = match serde_json::to_value(&event) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Could not serialize stream event");
                return;
            }
        };
        if let serde_json::Value::Object(map) = &mut record {
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
        }

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock()
            && let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush())
        {
            warn!(error = %e, "Could not write stream event");
        }
    }
}

impl Drop for JsonlStreamWriter {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
