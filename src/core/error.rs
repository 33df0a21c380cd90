//! Custom error types for semilla
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

use crate::core::types::Step;

/// Main error type for semilla operations
#[derive(Error, Debug)]
pub enum SemillaError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Browser automation errors
    #[error("Browser error: {0}")]
    Browser(String),

    /// A scenario phase failed
    #[error("Scenario step '{step}' failed: {reason}")]
    Step { step: Step, reason: String },

    /// The target app did not answer the preflight probe
    #[error("Cannot reach the membership app at {0}. Is it running?")]
    AppUnreachable(String),

    /// Agent-browser not installed
    #[error("agent-browser not found. Install with: npm install -g agent-browser && agent-browser install")]
    AgentBrowserNotFound,

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for semilla operations
pub type Result<T> = std::result::Result<T, SemillaError>;

impl SemillaError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a browser error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    /// Tag an error with the scenario step it interrupted
    ///
    /// Browser failures become step failures so the operator sees which
    /// phase died; anything else passes through untouched.
    pub fn at_step(self, step: Step) -> Self {
        match self {
            Self::Browser(reason) => Self::Step { step, reason },
            other => other,
        }
    }
}
