//! Pagination module
//!
//! # Overview
//!
//! Zero-based page-number pagination with a page count pinned by page 0.
//! Until page 0 is extracted the run assumes a single page; after that the
//! count never changes, whatever later pages report.

mod types;

pub use types::{NextPage, PaginationState};

#[cfg(test)]
mod tests;
