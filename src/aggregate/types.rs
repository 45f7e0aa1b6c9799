//! Accumulator types

use crate::salary::Normalized;
use serde::Serialize;

/// Running collection of normalized salaries and counters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationState {
    values: Vec<f64>,
    processed_with_salary: usize,
    found_total: Option<u64>,
}

impl AggregationState {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one listing's outcome.
    ///
    /// `processed` bumps the counter; a present `value` is appended.
    pub fn record(&mut self, processed: bool, value: Option<f64>) {
        if processed {
            self.processed_with_salary += 1;
        }
        if let Some(value) = value {
            self.values.push(value);
        }
    }

    /// Feed a normalizer result
    pub fn record_normalized(&mut self, normalized: Normalized) {
        self.record(normalized.processed, normalized.value);
    }

    /// Capture the API-reported total. Only the first call has an effect.
    pub fn capture_found(&mut self, found: u64) -> bool {
        if self.found_total.is_some() {
            return false;
        }
        self.found_total = Some(found);
        true
    }

    /// Normalized salaries collected so far, in listing order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Listings whose currency matched, with or without a value
    pub fn processed_with_salary(&self) -> usize {
        self.processed_with_salary
    }

    /// API-reported total, if captured
    pub fn found_total(&self) -> Option<u64> {
        self.found_total
    }

    /// Check if no value has been collected
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arithmetic mean of the collected values.
    ///
    /// `None` when nothing was collected; there is nothing to divide.
    pub fn finalize(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }

    /// Consume the accumulator into its summary
    pub fn into_summary(self) -> SalarySummary {
        SalarySummary {
            average: self.finalize(),
            values_collected: self.values.len(),
            processed_with_salary: self.processed_with_salary,
            found_total: self.found_total,
        }
    }
}

/// Final numbers of a run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SalarySummary {
    /// Mean of the normalized salaries, `None` when none were collected
    pub average: Option<f64>,
    /// Number of normalized salaries that went into the mean
    pub values_collected: usize,
    /// Listings whose currency matched the filter
    pub processed_with_salary: usize,
    /// API-reported total, `None` when page 0 was never extracted
    pub found_total: Option<u64>,
}

impl SalarySummary {
    /// Check if the run produced no salary data
    pub fn is_empty(&self) -> bool {
        self.average.is_none()
    }
}
