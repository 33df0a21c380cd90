//! Browser automation module
//!
//! Wraps the agent-browser CLI behind the [`Driver`] seam.

mod agent_browser;
mod driver;
mod response;

pub use agent_browser::AgentBrowser;
pub use driver::{fresh_session_name, Driver};
pub use response::CliResponse;
