//! Shared types used across semilla modules
//!
//! Contains the scenario step identifiers and the run report.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// A phase of the seeding scenario, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    /// Authenticate against the app
    Login,
    /// Create the client record and confirm it
    RegisterClient,
    /// Fill and submit the membership form
    CreateMembership,
    /// Optional check that the seeded client shows up
    Verify,
    /// Capture the success artifact
    Screenshot,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Login => write!(f, "login"),
            Step::RegisterClient => write!(f, "register-client"),
            Step::CreateMembership => write!(f, "create-membership"),
            Step::Verify => write!(f, "verify"),
            Step::Screenshot => write!(f, "screenshot"),
        }
    }
}

/// Outcome of one completed scenario step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Which step completed
    pub step: Step,
    /// How long it took
    pub duration_ms: u64,
}

impl StepOutcome {
    /// Create a new outcome
    pub fn new(step: Step, duration_ms: u64) -> Self {
        Self { step, duration_ms }
    }
}

/// Summary of a successful seeding run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Completed steps in execution order
    pub steps: Vec<StepOutcome>,
    /// Where the screenshot landed
    pub artifact: PathBuf,
    /// Wall-clock duration of the whole run
    pub duration_ms: u64,
}

impl RunReport {
    /// Write the report as pretty JSON, creating parent directories
    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
