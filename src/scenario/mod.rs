//! Seeding scenario module
//!
//! The fixed choreography this tool performs against the membership app,
//! the app's UI contract, and the start-date arithmetic.

pub mod dates;
pub mod pages;
pub mod runner;

pub use runner::ScenarioRunner;
