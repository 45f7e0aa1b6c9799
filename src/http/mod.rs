//! HTTP module
//!
//! Provides the HTTP client and the page fetcher built on top of it.
//!
//! # Features
//!
//! - **Default Headers**: `Accept: application/json` and a descriptive User-Agent
//! - **Status Mapping**: non-success responses become `HttpStatus` errors
//! - **Page Fetching**: `PageSource` trait with an HTTP-backed `ListingsFetcher`

mod client;
mod fetcher;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use fetcher::{ListingsFetcher, PageSource};

#[cfg(test)]
mod tests;
