//! Salary normalizer
//!
//! Rules, in order:
//! 1. No salary on the listing: ignored.
//! 2. Currency differs from the desired one (case-sensitive): ignored.
//! 3. Otherwise the listing is processed, whatever its bounds.
//! 4. Value: midpoint of both bounds, else the single bound, else none.

use crate::decode::{ListingRecord, SalaryRecord};

/// Result of normalizing one listing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Normalized {
    /// Currency matched, so the listing counts as processed
    pub processed: bool,
    /// Single comparable number, if the salary had any bound
    pub value: Option<f64>,
}

impl Normalized {
    /// A listing that does not count at all
    pub fn ignored() -> Self {
        Self::default()
    }

    /// A processed listing with an optional value
    pub fn processed(value: Option<f64>) -> Self {
        Self {
            processed: true,
            value,
        }
    }
}

/// Reduces listings to normalized salaries in one currency
#[derive(Debug, Clone)]
pub struct SalaryNormalizer {
    desired_currency: String,
}

impl SalaryNormalizer {
    /// Create a normalizer for `desired_currency`
    pub fn new(desired_currency: impl Into<String>) -> Self {
        Self {
            desired_currency: desired_currency.into(),
        }
    }

    /// The currency this normalizer keeps
    pub fn currency(&self) -> &str {
        &self.desired_currency
    }

    /// Normalize one listing
    pub fn normalize(&self, listing: &ListingRecord) -> Normalized {
        let Some(salary) = &listing.salary else {
            return Normalized::ignored();
        };

        if salary.currency.as_deref() != Some(self.desired_currency.as_str()) {
            return Normalized::ignored();
        }

        Normalized::processed(normalized_value(salary))
    }
}

/// Single number for a salary range
pub fn normalized_value(salary: &SalaryRecord) -> Option<f64> {
    match (salary.from, salary.to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from),
        (None, Some(to)) => Some(to),
        (None, None) => None,
    }
}
