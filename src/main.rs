//! Semilla - Browser-Driven Test Data Seeder
//!
//! Main entry point for the CLI application.

use std::path::PathBuf;

use clap::Parser;
use url::Url;

use semilla::{probe, AgentBrowser, Config, ScenarioRunner, SemillaError};

/// Seed the membership app with a client and a back-dated membership
#[derive(Parser, Debug)]
#[command(name = "semilla")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the membership app
    #[arg(long, short = 'u')]
    base_url: Option<String>,

    /// Admin username for the login form
    #[arg(long)]
    username: Option<String>,

    /// Admin password for the login form
    #[arg(long)]
    password: Option<String>,

    /// Full name for the seeded client
    #[arg(long, short = 'n')]
    name: Option<String>,

    /// How many days in the past the membership starts
    #[arg(long)]
    days_ago: Option<u32>,

    /// Where to write the screenshot
    #[arg(long, short = 's')]
    screenshot: Option<PathBuf>,

    /// Capture the full page instead of the viewport
    #[arg(long)]
    full_page: bool,

    /// Run in headed browser mode (visible window)
    #[arg(long)]
    headed: bool,

    /// Wait for the seeded client on the page before the screenshot
    #[arg(long)]
    verify: bool,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Only check the app is reachable, then exit
    #[arg(long)]
    check: bool,

    /// Open the screenshot after a successful run
    #[arg(long)]
    open: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug output
    #[arg(long, short = 'd')]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", Config::default_config_toml());
        return Ok(());
    }

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(ref base_url) = args.base_url {
        config.app.base_url = base_url.clone();
    }

    if let Some(ref username) = args.username {
        config.app.username = username.clone();
    }

    if let Some(ref password) = args.password {
        config.app.password = password.clone();
    }

    if let Some(ref name) = args.name {
        config.seed.full_name = name.clone();
    }

    if let Some(days_ago) = args.days_ago {
        config.seed.start_offset_days = days_ago;
    }

    if let Some(ref screenshot) = args.screenshot {
        config.artifact.screenshot_path = screenshot.clone();
    }

    if args.full_page {
        config.artifact.full_page = true;
    }

    if args.headed {
        config.browser.headed = true;
    }

    if args.verify {
        config.runner.verify = true;
    }

    if args.debug {
        config.runner.debug = true;
    }

    config.validate()?;

    // No point launching a browser against a dead app
    probe::check_app(&config.app.base_url).await?;

    if args.check {
        println!("App is reachable at {}", config.app.base_url);
        return Ok(());
    }

    if !AgentBrowser::is_available().await {
        return Err(SemillaError::AgentBrowserNotFound.into());
    }

    let driver = AgentBrowser::from_config(&config.browser);

    if config.runner.debug {
        eprintln!("DEBUG: Browser session: {}", driver.session_name());
    }

    let report = ScenarioRunner::new(config, driver).run().await?;

    println!("Seeded. Screenshot: {}", report.artifact.display());

    if let Some(ref report_path) = args.report {
        report.write_json(report_path)?;
        println!("Report: {}", report_path.display());
    }

    if args.open {
        let shown = report
            .artifact
            .canonicalize()
            .unwrap_or_else(|_| report.artifact.clone());
        let target = Url::from_file_path(&shown)
            .map(String::from)
            .unwrap_or_else(|_| shown.to_string_lossy().into_owned());

        if webbrowser::open(&target).is_err() {
            println!("Please open the screenshot manually: {}", shown.display());
        }
    }

    Ok(())
}
