//! Execution engine module
//!
//! Main page loop.
//!
//! # Overview
//!
//! `SalaryEngine` drives one run: fetch a page, decode it, normalize each
//! listing into the accumulator, then either pause and fetch the next page
//! or stop. Every failure is resolved inside the loop, so a run always
//! yields a [`RunReport`]:
//!
//! - request failure: the run is aborted, partial results are kept
//! - malformed body: the page is skipped, the cursor still advances
//! - empty page: the run ends normally

mod types;

pub use types::{EngineConfig, RunOutcome, RunReport, RunStats, TerminationReason};

use crate::aggregate::AggregationState;
use crate::decode::{DecodeOutcome, PageDecoder, PageResult};
use crate::error::Error;
use crate::http::PageSource;
use crate::pagination::{NextPage, PaginationState};
use crate::salary::SalaryNormalizer;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Drives the fetch/decode/normalize loop for a single currency
pub struct SalaryEngine {
    /// Engine configuration
    config: EngineConfig,
    /// Statistics of the last run
    stats: RunStats,
}

impl SalaryEngine {
    /// Create an engine for `currency` with the default delay
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            config: EngineConfig::new().with_currency(currency),
            stats: RunStats::default(),
        }
    }

    /// Set engine configuration
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get statistics of the last run
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Run the page loop to completion
    pub async fn run(&mut self, source: &dyn PageSource, decoder: &dyn PageDecoder) -> RunReport {
        let start = Instant::now();
        self.stats = RunStats::default();

        let normalizer = SalaryNormalizer::new(&self.config.desired_currency);
        let mut aggregate = AggregationState::new();
        let mut pagination = PaginationState::new();

        info!(
            currency = %self.config.desired_currency,
            "Searching listings with salary in {}",
            self.config.desired_currency
        );

        let outcome = loop {
            let page = pagination.page;
            info!("Requesting page {} of {}", page + 1, pagination.total_pages);

            let body = match source.fetch_page(page).await {
                Ok(body) => body,
                Err(e) => {
                    error!(page, "Request for page {page} failed: {e}");
                    break RunOutcome::aborted(page, &e);
                }
            };
            self.stats.add_page();

            let next = match decoder.decode(page, &body) {
                Ok(DecodeOutcome::Page(result)) => {
                    self.extract(&result, &normalizer, &mut pagination, &mut aggregate);
                    pagination.advance()
                }
                Ok(DecodeOutcome::EndOfData) => {
                    info!(page, "No items on page {}, stopping", page + 1);
                    break RunOutcome::terminated(TerminationReason::EndOfData);
                }
                Err(e) => {
                    self.skip(page, &e);
                    pagination.advance()
                }
            };

            match next {
                NextPage::Continue { page } => {
                    if !self.config.request_delay.is_zero() {
                        debug!(next_page = page, delay = ?self.config.request_delay, "Pausing before next request");
                        tokio::time::sleep(self.config.request_delay).await;
                    }
                }
                NextPage::Done => break RunOutcome::terminated(TerminationReason::LastPage),
            }
        };

        self.stats.set_duration(start.elapsed().as_millis() as u64);

        let summary = aggregate.into_summary();
        info!(
            processed = summary.processed_with_salary,
            values = summary.values_collected,
            pages = self.stats.pages_fetched,
            skipped = self.stats.pages_skipped,
            "Run finished: {outcome:?}"
        );

        RunReport {
            currency: self.config.desired_currency.clone(),
            outcome,
            summary,
            total_pages: pagination.total_pages,
            stats: self.stats.clone(),
        }
    }

    /// Feed one decoded page into the accumulator, pinning totals on page 0
    fn extract(
        &mut self,
        result: &PageResult,
        normalizer: &SalaryNormalizer,
        pagination: &mut PaginationState,
        aggregate: &mut AggregationState,
    ) {
        if pagination.pin(&result.meta) {
            aggregate.capture_found(result.meta.found);
            info!(
                found = result.meta.found,
                pages = result.meta.total_pages,
                "API reports {} listings across {} pages",
                result.meta.found,
                result.meta.total_pages
            );
        } else if result.meta.total_pages != pagination.total_pages {
            debug!(
                page = pagination.page,
                reported = result.meta.total_pages,
                pinned = pagination.total_pages,
                "Ignoring page count reported after the first page"
            );
        }

        info!(page = pagination.page, "Found {} listings on page", result.items.len());

        for listing in &result.items {
            aggregate.record_normalized(normalizer.normalize(listing));
        }
        self.stats.add_listings(result.items.len());
    }

    /// Log a page that could not be decoded
    fn skip(&mut self, page: u32, error: &Error) {
        self.stats.add_skipped();
        match error {
            Error::Decode { excerpt, .. } => {
                warn!(page, "Skipping page: {error}");
                debug!(page, "Response body: {excerpt}");
            }
            other => warn!(page, "Skipping page: {other}"),
        }
    }
}
