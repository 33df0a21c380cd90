//! Live seeding integration tests
//!
//! These drive a real browser against a running membership app. They are
//! ignored by default; with the app up at http://localhost:3306 and
//! agent-browser installed, run:
//!
//!     cargo test --test live_seed -- --ignored

use std::time::Duration;

use semilla::core::Config;
use semilla::{probe, AgentBrowser, ScenarioRunner};
use tokio::time::timeout;

/// Config for live runs, with the screenshot kept out of the source tree
fn live_config() -> Config {
    let mut config = Config::load();
    config.artifact.screenshot_path = std::env::temp_dir()
        .join(format!("semilla-live-{}", std::process::id()))
        .join("seed-verification.png");
    config
}

/// Check the app and agent-browser are actually there
async fn live_ready(config: &Config) -> Result<(), String> {
    if probe::check_app(&config.app.base_url).await.is_err() {
        return Err(format!(
            "membership app not reachable at {}",
            config.app.base_url
        ));
    }

    if !AgentBrowser::is_available().await {
        return Err("agent-browser not available".to_string());
    }

    Ok(())
}

/// Full end-to-end seed against the running app
#[tokio::test]
#[ignore] // Requires the membership app and agent-browser
async fn test_full_seed_run_produces_the_screenshot() {
    let config = live_config();
    if let Err(reason) = live_ready(&config).await {
        eprintln!("Skipping test: {}", reason);
        return;
    }

    let screenshot = config.artifact.screenshot_path.clone();
    let _ = std::fs::remove_file(&screenshot);

    let driver = AgentBrowser::from_config(&config.browser);
    let result = timeout(
        Duration::from_secs(120),
        ScenarioRunner::new(config, driver).run(),
    )
    .await;

    let report = result.expect("seed run timed out").expect("seed run failed");
    assert!(
        screenshot.is_file(),
        "screenshot missing at {}",
        screenshot.display()
    );
    assert_eq!(report.artifact, screenshot);
    assert!(!report.steps.is_empty());
}

/// Verify mode waits for the seeded client before the screenshot
#[tokio::test]
#[ignore]
async fn test_verified_seed_run() {
    let mut config = live_config();
    config.runner.verify = true;

    if let Err(reason) = live_ready(&config).await {
        eprintln!("Skipping test: {}", reason);
        return;
    }

    let driver = AgentBrowser::from_config(&config.browser);
    let result = timeout(
        Duration::from_secs(120),
        ScenarioRunner::new(config, driver).run(),
    )
    .await;

    result.expect("seed run timed out").expect("seed run failed");
}

/// The app does not deduplicate seeds, so a rerun must work the same way
#[tokio::test]
#[ignore]
async fn test_rerun_seeds_a_second_record() {
    let config = live_config();
    if let Err(reason) = live_ready(&config).await {
        eprintln!("Skipping test: {}", reason);
        return;
    }

    for _ in 0..2 {
        let config = live_config();
        let driver = AgentBrowser::from_config(&config.browser);
        let result = timeout(
            Duration::from_secs(120),
            ScenarioRunner::new(config, driver).run(),
        )
        .await;

        result.expect("seed run timed out").expect("seed run failed");
    }
}
