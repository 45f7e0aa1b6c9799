//! Aggregation of normalized salaries
//!
//! The accumulator only grows during a run. It is created empty, fed once
//! per listing, and consumed once into a [`SalarySummary`].

mod types;

pub use types::{AggregationState, SalarySummary};
