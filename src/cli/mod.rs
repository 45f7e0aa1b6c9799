//! CLI module
//!
//! Command-line interface for salary runs.
//!
//! # Commands
//!
//! - `run` - Fetch all pages and print the salary report
//! - `show-config` - Print the effective configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, SearchArgs};
pub use runner::Runner;
