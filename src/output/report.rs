//! Report rendering

use crate::engine::{RunOutcome, RunReport};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON envelope around a run report
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// When the report was rendered
    pub generated_at: DateTime<Utc>,
    /// Search text of the run
    pub query: &'a str,
    /// The report itself
    #[serde(flatten)]
    pub report: &'a RunReport,
}

impl<'a> JsonReport<'a> {
    /// Wrap a report, stamped with the current time
    pub fn new(query: &'a str, report: &'a RunReport) -> Self {
        Self {
            generated_at: Utc::now(),
            query,
            report,
        }
    }
}

/// Render a report as pretty-printed JSON
pub fn render_json(query: &str, report: &RunReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(query, report))?)
}

/// Render the human-readable results block.
///
/// Processed count and found total are always present; the average line
/// is replaced by a "not specified" line when no value was collected.
pub fn render_pretty(report: &RunReport) -> String {
    let currency = &report.currency;
    let summary = &report.summary;
    let mut out = String::from("--- Results ---\n");

    if let RunOutcome::Aborted { page, message } = &report.outcome {
        out.push_str(&format!(
            "Run aborted while requesting page {}: {message}\n",
            page + 1
        ));
    }

    out.push_str(&format!(
        "Processed {} listings with salary in {currency}\n",
        summary.processed_with_salary
    ));

    match summary.average {
        Some(average) => {
            out.push_str(&format!(
                "Average salary: {} {currency}\n",
                format_amount(average)
            ));
        }
        None => {
            out.push_str(&format!(
                "Salary in {currency} is not specified in any processed listing\n"
            ));
        }
    }

    out.push_str(&format!(
        "Total found according to the API: {} listings\n",
        summary.found_total.unwrap_or(0)
    ));

    out
}

/// Round to a whole number and group thousands with commas
pub fn format_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
