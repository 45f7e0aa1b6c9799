//! Engine types
//!
//! Configuration, outcome and report types for the salary engine.

use crate::aggregate::SalarySummary;
use crate::config::SearchConfig;
use crate::error::Error;
use serde::Serialize;
use std::time::Duration;

/// Why a run ended normally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// The page cursor reached the pinned page count
    LastPage,
    /// A page came back with no items
    EndOfData,
}

/// How a run ended. Both variants carry a usable partial aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Normal end of the page loop
    Terminated {
        /// Why the loop stopped
        reason: TerminationReason,
    },
    /// A request failed and the loop stopped early
    Aborted {
        /// Page whose request failed
        page: u32,
        /// Failure description
        message: String,
    },
}

impl RunOutcome {
    /// Create a terminated outcome
    pub fn terminated(reason: TerminationReason) -> Self {
        Self::Terminated { reason }
    }

    /// Create an aborted outcome from the failing request's error
    pub fn aborted(page: u32, error: &Error) -> Self {
        Self::Aborted {
            page,
            message: error.to_string(),
        }
    }

    /// Check if the run ended normally
    pub fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated { .. })
    }

    /// Check if the run was cut short by a request failure
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }
}

/// Configuration for the engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Currency a salary must carry to count
    pub desired_currency: String,
    /// Pause before each request after the first
    pub request_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let search = SearchConfig::default();
        Self {
            desired_currency: search.currency.clone(),
            request_delay: search.request_delay(),
        }
    }
}

impl EngineConfig {
    /// Create a new engine config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the engine settings from a search config
    pub fn from_search(search: &SearchConfig) -> Self {
        Self {
            desired_currency: search.currency.clone(),
            request_delay: search.request_delay(),
        }
    }

    /// Set the desired currency
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.desired_currency = currency.into();
        self
    }

    /// Set the inter-request delay
    #[must_use]
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }
}

/// Statistics from a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Pages whose request succeeded
    pub pages_fetched: usize,
    /// Pages skipped because their body could not be decoded
    pub pages_skipped: usize,
    /// Listings handed to the normalizer
    pub listings_seen: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl RunStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fetched page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Add a skipped page
    pub fn add_skipped(&mut self) {
        self.pages_skipped += 1;
    }

    /// Add listings
    pub fn add_listings(&mut self, count: usize) {
        self.listings_seen += count;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

/// Everything a run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Currency the salaries were filtered on
    pub currency: String,
    /// How the run ended
    pub outcome: RunOutcome,
    /// Aggregated numbers
    #[serde(flatten)]
    pub summary: SalarySummary,
    /// Page count the loop ran against
    pub total_pages: u32,
    /// Run statistics
    pub stats: RunStats,
}

impl RunReport {
    /// Check if no salary value was collected
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }
}
