//! Semilla - Browser-Driven Test Data Seeder
//!
//! Seeds a club membership app with a client and a back-dated membership by
//! driving the app's own UI through the agent-browser CLI, then captures a
//! screenshot as the durable success artifact.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Browser**: The [`Driver`] seam and the agent-browser adapter
//! - **Scenario**: The seeding choreography and the app's UI contract
//! - **Probe**: HTTP preflight against the target app
//!
//! # Usage
//!
//! ```rust,no_run
//! use semilla::{AgentBrowser, Config, ScenarioRunner};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::load();
//!     let driver = AgentBrowser::from_config(&config.browser);
//!
//!     let report = ScenarioRunner::new(config, driver).run().await.unwrap();
//!     println!("Screenshot at {}", report.artifact.display());
//! }
//! ```

pub mod browser;
pub mod core;
pub mod probe;
pub mod scenario;

// Re-export commonly used items
pub use browser::{AgentBrowser, Driver};
pub use core::{Config, Result, SemillaError};
pub use scenario::ScenarioRunner;
