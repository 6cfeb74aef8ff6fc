//! Output format value object

use serde::{Deserialize, Serialize};

/// How reconciled transcripts are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per message and tool invocation (default)
    #[default]
    Summary,
    /// The transcript as JSON, in wire format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_summary() {
        assert_eq!(OutputFormat::default(), OutputFormat::Summary);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Summary).unwrap();
        assert_eq!(json, "\"summary\"");
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
