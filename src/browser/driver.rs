//! Browser driver seam
//!
//! The scenario runner talks to the browser through this trait, so the
//! agent-browser adapter can be swapped out (for a scripted fake in tests,
//! or another backend later).

use std::path::Path;

use async_trait::async_trait;
use rand::distr::{Alphanumeric, SampleString};

use crate::core::Result;

/// Browser interactions the seeding scenario needs
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigate to a URL and let the page settle
    async fn goto(&self, url: &str) -> Result<()>;

    /// Fill an input found by its accessible label
    async fn fill_by_label(&self, label: &str, value: &str) -> Result<()>;

    /// Click a button found by ARIA role and accessible name
    async fn click_button(&self, name: &str) -> Result<()>;

    /// Choose a select option by visible label, on a select found by label
    async fn select_by_label(&self, label: &str, option: &str) -> Result<()>;

    /// Choose a select option by visible label, on a select found by CSS selector
    async fn select(&self, selector: &str, option: &str) -> Result<()>;

    /// Fill an input found by CSS selector
    async fn fill(&self, selector: &str, value: &str) -> Result<()>;

    /// Wait for an element to be attached
    async fn wait_for(&self, selector: &str) -> Result<()>;

    /// Wait until the browser sits at the given URL
    async fn wait_for_url(&self, url: &str) -> Result<()>;

    /// Wait for text to appear anywhere on the page
    async fn wait_for_text(&self, text: &str) -> Result<()>;

    /// Capture a screenshot to the given path
    async fn screenshot(&self, path: &Path, full_page: bool) -> Result<()>;

    /// Close the browser session
    async fn close(&self) -> Result<()>;
}

/// Generate a one-off session name so runs never share browser state
pub fn fresh_session_name() -> String {
    let suffix = Alphanumeric.sample_string(&mut rand::rng(), 8);
    format!("semilla-{}", suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_name_shape() {
        let name = fresh_session_name();
        assert!(name.starts_with("semilla-"));
        assert_eq!(name.len(), "semilla-".len() + 8);
    }

    #[test]
    fn test_fresh_session_names_differ() {
        assert_ne!(fresh_session_name(), fresh_session_name());
    }
}
