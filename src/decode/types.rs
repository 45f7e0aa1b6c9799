//! Decoder types and traits
//!
//! Typed view of a listings page. Only the salary of a listing is
//! interpreted; every other field of the payload is ignored.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Salary range attached to a listing. Either bound may be open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryRecord {
    /// Currency code, e.g. "RUR"
    pub currency: Option<String>,
    /// Lower bound
    pub from: Option<f64>,
    /// Upper bound
    pub to: Option<f64>,
}

impl SalaryRecord {
    /// Create a salary record
    pub fn new(currency: impl Into<String>, from: Option<f64>, to: Option<f64>) -> Self {
        Self {
            currency: Some(currency.into()),
            from,
            to,
        }
    }
}

/// One job posting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    /// Salary range, absent or `null` when the posting has none
    #[serde(default)]
    pub salary: Option<SalaryRecord>,
}

impl ListingRecord {
    /// Create a listing carrying a salary
    pub fn with_salary(salary: SalaryRecord) -> Self {
        Self {
            salary: Some(salary),
        }
    }

    /// Create a listing without a salary
    pub fn without_salary() -> Self {
        Self::default()
    }
}

/// Pagination metadata reported by a page.
///
/// Every page carries it, but only page 0's copy is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    /// Total number of pages, at least 1
    pub total_pages: u32,
    /// Total number of listings matching the query
    pub found: u64,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            total_pages: 1,
            found: 0,
        }
    }
}

/// A decoded page with at least one listing
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    /// Listings in the order the API returned them
    pub items: Vec<ListingRecord>,
    /// Pagination metadata of this page
    pub meta: PageMeta,
}

/// What a well-formed page body turned out to be
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    /// Listings present
    Page(PageResult),
    /// Items missing or empty; the run should stop
    EndOfData,
}

impl DecodeOutcome {
    /// Check if this is the end-of-data signal
    pub fn is_end_of_data(&self) -> bool {
        matches!(self, Self::EndOfData)
    }

    /// Get the page result, if any
    pub fn page(&self) -> Option<&PageResult> {
        match self {
            Self::Page(page) => Some(page),
            Self::EndOfData => None,
        }
    }
}

/// Trait for turning a raw page body into listings
pub trait PageDecoder: Send + Sync {
    /// Decode the body of page `page`.
    ///
    /// A malformed body is a decode error carrying `page` and an excerpt
    /// of the body.
    fn decode(&self, page: u32, body: &str) -> Result<DecodeOutcome>;
}
