// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Salary Scout
//!
//! Average advertised salary for a job search, computed over every page of a
//! paginated listings API.
//!
//! ## Features
//!
//! - **Page-Number Pagination**: page count pinned by the first page
//! - **Tolerant Decoding**: malformed pages are skipped, not fatal
//! - **Salary Normalization**: midpoint of a range, or whichever bound exists
//! - **Partial Results**: a failed request still yields a report
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use salary_scout::config::SearchConfig;
//! use salary_scout::decode::JsonPageDecoder;
//! use salary_scout::engine::{EngineConfig, SalaryEngine};
//! use salary_scout::http::ListingsFetcher;
//!
//! #[tokio::main]
//! async fn main() -> salary_scout::Result<()> {
//!     let config = SearchConfig::new().with_query("rust").with_currency("RUR");
//!     config.validate()?;
//!
//!     let fetcher = ListingsFetcher::from_config(&config)?;
//!     let mut engine = SalaryEngine::new(&config.currency)
//!         .with_config(EngineConfig::from_search(&config));
//!
//!     let report = engine.run(&fetcher, &JsonPageDecoder::new()).await;
//!     println!("{:?}", report.summary.average);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        SalaryEngine                          │
//! │   PaginationState: page, total_pages (pinned by page 0)      │
//! └──────────────────────────────────────────────────────────────┘
//!        │               │                 │                │
//! ┌──────┴─────┬─────────┴──────┬──────────┴───────┬────────┴────────┐
//! │ PageSource │  PageDecoder   │ SalaryNormalizer │ AggregationState│
//! ├────────────┼────────────────┼──────────────────┼─────────────────┤
//! │ HTTP GET   │ JSON → typed   │ currency filter  │ values          │
//! │ one page   │ end of data    │ midpoint / bound │ processed count │
//! │            │ decode errors  │                  │ found total     │
//! └────────────┴────────────────┴──────────────────┴─────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Search configuration
pub mod config;

/// HTTP client and page fetching
pub mod http;

/// Page decoding into typed listings
pub mod decode;

/// Salary normalization
pub mod salary;

/// Salary accumulator
pub mod aggregate;

/// Page cursor
pub mod pagination;

/// Main page loop
pub mod engine;

/// Report rendering
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

pub use config::SearchConfig;
pub use engine::{RunOutcome, RunReport, SalaryEngine};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
