//! Reachability preflight
//!
//! One HTTP GET against the app's base URL before any browser is launched.
//! Any response counts as reachable, 4xx and redirects included; only a
//! connect or timeout failure means the app is not there.

use std::time::Duration;

use crate::core::{Result, SemillaError};

/// How long the preflight waits for any response
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Check the membership app answers at all
pub async fn check_app(base_url: &str) -> Result<()> {
    let client = reqwest::Client::builder().timeout(PROBE_TIMEOUT).build()?;

    match client.get(base_url).send().await {
        Ok(_) => Ok(()),
        Err(e) if e.is_connect() || e.is_timeout() => {
            Err(SemillaError::AppUnreachable(base_url.to_string()))
        }
        Err(e) => Err(SemillaError::Http(e)),
    }
}
