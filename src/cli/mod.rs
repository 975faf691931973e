//! Command-line interface for courier-rs
//!
//! Parsing (`parser`) and command dispatch (`executor`), split the way the
//! rest of the crate separates surface from behavior.

pub mod executor;
pub mod parser;

pub use executor::execute_command;
pub use parser::{Cli, Commands};
