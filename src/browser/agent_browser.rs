//! Agent-browser adapter
//!
//! Implements [`Driver`] by shelling out to the agent-browser CLI, one
//! subprocess invocation per interaction. Sessions isolate browser state
//! between runs.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::browser::driver::{fresh_session_name, Driver};
use crate::browser::response::CliResponse;
use crate::core::config::BrowserConfig;
use crate::core::{Result, SemillaError};

/// Browser driver backed by the agent-browser CLI
pub struct AgentBrowser {
    /// Session name for isolation
    session_name: String,
    /// Whether to run in headed mode
    headed: bool,
    /// Wait budget in ms for wait commands; None keeps the CLI default
    timeout_ms: Option<u64>,
}

impl AgentBrowser {
    /// Create an adapter with a fixed session name
    pub fn new(session_name: impl Into<String>) -> Self {
        Self {
            session_name: session_name.into(),
            headed: false,
            timeout_ms: None,
        }
    }

    /// Create an adapter from config, minting a fresh session when none is pinned
    pub fn from_config(config: &BrowserConfig) -> Self {
        Self {
            session_name: config
                .session_name
                .clone()
                .unwrap_or_else(fresh_session_name),
            headed: config.headed,
            timeout_ms: config.timeout_ms,
        }
    }

    /// The session this adapter drives
    pub fn session_name(&self) -> &str {
        &self.session_name
    }

    /// Check if agent-browser is installed
    pub async fn is_available() -> bool {
        Command::new("agent-browser")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Assemble the full argument list for one invocation
    fn command_args(&self, args: &[&str]) -> Vec<String> {
        let mut full: Vec<String> = vec!["--session".to_string(), self.session_name.clone()];

        if self.headed {
            full.push("--headed".to_string());
        }

        full.extend(args.iter().map(|s| s.to_string()));
        full.push("--json".to_string());
        full
    }

    /// Run an agent-browser command
    async fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("agent-browser")
            .args(self.command_args(args))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SemillaError::AgentBrowserNotFound
                } else {
                    SemillaError::browser(format!("Failed to run agent-browser: {}", e))
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = if stderr.trim().is_empty() {
                stdout.trim()
            } else {
                stderr.trim()
            };
            return Err(SemillaError::browser(format!(
                "agent-browser {} failed: {}",
                args.first().unwrap_or(&""),
                detail
            )));
        }

        // A zero exit with an error envelope still counts as failure
        if let Some(resp) = CliResponse::parse(&stdout) {
            if !resp.success {
                return Err(SemillaError::browser(resp.error_message()));
            }
        }

        Ok(stdout)
    }

    /// Run a wait command with the configured budget applied
    async fn run_wait(&self, args: &[&str]) -> Result<String> {
        let ms_str;
        let mut full = args.to_vec();

        if let Some(ms) = self.timeout_ms {
            ms_str = ms.to_string();
            full.push("--timeout");
            full.push(&ms_str);
        }

        self.run(&full).await
    }
}

#[async_trait]
impl Driver for AgentBrowser {
    async fn goto(&self, url: &str) -> Result<()> {
        self.run(&["open", url]).await?;

        // Settle the page; a quiet network is nice-to-have, not a failure
        let _ = self.run_wait(&["wait", "--load", "networkidle"]).await;

        Ok(())
    }

    async fn fill_by_label(&self, label: &str, value: &str) -> Result<()> {
        self.run(&["find", "label", label, "fill", value]).await?;
        Ok(())
    }

    async fn click_button(&self, name: &str) -> Result<()> {
        self.run(&["find", "role", "button", "click", "--name", name])
            .await?;
        Ok(())
    }

    async fn select_by_label(&self, label: &str, option: &str) -> Result<()> {
        self.run(&["find", "label", label, "select", option]).await?;
        Ok(())
    }

    async fn select(&self, selector: &str, option: &str) -> Result<()> {
        self.run(&["select", selector, option]).await?;
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        self.run(&["fill", selector, value]).await?;
        Ok(())
    }

    async fn wait_for(&self, selector: &str) -> Result<()> {
        self.run_wait(&["wait", selector]).await?;
        Ok(())
    }

    async fn wait_for_url(&self, url: &str) -> Result<()> {
        self.run_wait(&["wait", "--url", url]).await?;
        Ok(())
    }

    async fn wait_for_text(&self, text: &str) -> Result<()> {
        self.run_wait(&["wait", "--text", text]).await?;
        Ok(())
    }

    async fn screenshot(&self, path: &Path, full_page: bool) -> Result<()> {
        let path_str = path.to_string_lossy();
        let mut args = vec!["screenshot", path_str.as_ref()];

        if full_page {
            args.push("--full");
        }

        self.run(&args).await?;
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.run(&["close"]).await?;
        Ok(())
    }
}
