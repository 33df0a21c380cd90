//! Response parsing for agent-browser output
//!
//! With `--json`, agent-browser wraps every command result in a small
//! envelope. Commands can exit 0 and still report failure there.

use serde::{Deserialize, Serialize};

/// Parsed `--json` envelope from agent-browser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliResponse {
    /// Whether the command succeeded
    #[serde(default)]
    pub success: bool,
    /// Error message when it did not
    #[serde(default)]
    pub error: Option<String>,
    /// Command-specific payload
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl CliResponse {
    /// Parse an envelope from stdout; None if the output is not JSON
    pub fn parse(stdout: &str) -> Option<Self> {
        serde_json::from_str(stdout.trim()).ok()
    }

    /// The failure message to surface to the operator
    pub fn error_message(&self) -> String {
        self.error
            .clone()
            .unwrap_or_else(|| "agent-browser reported failure without a message".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_envelope() {
        let resp = CliResponse::parse(r#"{"success": true, "data": {"url": "http://x/"}}"#)
            .expect("should parse");
        assert!(resp.success);
        assert!(resp.error.is_none());
        assert!(resp.data.is_some());
    }

    #[test]
    fn test_parse_failure_envelope() {
        let resp = CliResponse::parse(r#"{"success": false, "error": "timeout waiting for #x"}"#)
            .expect("should parse");
        assert!(!resp.success);
        assert_eq!(resp.error_message(), "timeout waiting for #x");
    }

    #[test]
    fn test_parse_missing_fields_defaults() {
        let resp = CliResponse::parse("{}").expect("should parse");
        assert!(!resp.success);
        assert!(resp.error.is_none());
        assert!(resp.data.is_none());
    }

    #[test]
    fn test_parse_plain_text_is_none() {
        assert!(CliResponse::parse("ok").is_none());
        assert!(CliResponse::parse("").is_none());
    }
}
