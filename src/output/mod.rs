//! Output module
//!
//! Renders a [`RunReport`](crate::engine::RunReport) for the console.
//!
//! # Overview
//!
//! - `pretty`: the human-readable results block
//! - `json`: the serialized report with a timestamp, one object per run

mod report;

pub use report::{format_amount, render_json, render_pretty, JsonReport};

#[cfg(test)]
mod tests;
