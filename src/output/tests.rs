//! Tests for output module

use super::*;
use crate::aggregate::SalarySummary;
use crate::engine::{RunOutcome, RunReport, RunStats, TerminationReason};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn report(average: Option<f64>, outcome: RunOutcome) -> RunReport {
    RunReport {
        currency: "RUR".to_string(),
        outcome,
        summary: SalarySummary {
            average,
            values_collected: usize::from(average.is_some()),
            processed_with_salary: 1,
            found_total: Some(2),
        },
        total_pages: 1,
        stats: RunStats::default(),
    }
}

#[test_case(0.0, "0" ; "zero")]
#[test_case(999.4, "999" ; "below a thousand")]
#[test_case(1500.0, "1,500" ; "thousands")]
#[test_case(123_456.5, "123,457" ; "rounds half away from zero")]
#[test_case(1_234_567.0, "1,234,567" ; "millions")]
#[test_case(-2500.0, "-2,500" ; "negative")]
fn test_format_amount(value: f64, expected: &str) {
    assert_eq!(format_amount(value), expected);
}

#[test]
fn test_render_pretty_with_average() {
    let text = render_pretty(&report(
        Some(1500.0),
        RunOutcome::terminated(TerminationReason::LastPage),
    ));

    assert_eq!(
        text,
        "--- Results ---\n\
         Processed 1 listings with salary in RUR\n\
         Average salary: 1,500 RUR\n\
         Total found according to the API: 2 listings\n"
    );
}

#[test]
fn test_render_pretty_without_data() {
    let text = render_pretty(&report(
        None,
        RunOutcome::terminated(TerminationReason::EndOfData),
    ));

    assert_eq!(
        text,
        "--- Results ---\n\
         Processed 1 listings with salary in RUR\n\
         Salary in RUR is not specified in any processed listing\n\
         Total found according to the API: 2 listings\n"
    );
}

#[test]
fn test_render_pretty_processed_without_bounds_keeps_counts() {
    let mut r = report(None, RunOutcome::terminated(TerminationReason::LastPage));
    r.summary.processed_with_salary = 2;
    r.summary.found_total = Some(7);

    let text = render_pretty(&r);
    assert!(text.contains("Processed 2 listings with salary in RUR"));
    assert!(text.contains("Salary in RUR is not specified in any processed listing"));
    assert!(text.contains("Total found according to the API: 7 listings"));
    assert!(!text.contains("Average salary"));
}

#[test]
fn test_render_pretty_aborted_before_any_page() {
    let mut r = report(
        None,
        RunOutcome::Aborted {
            page: 0,
            message: "HTTP 500: internal error".to_string(),
        },
    );
    r.summary.processed_with_salary = 0;
    r.summary.found_total = None;

    assert_eq!(
        render_pretty(&r),
        "--- Results ---\n\
         Run aborted while requesting page 1: HTTP 500: internal error\n\
         Processed 0 listings with salary in RUR\n\
         Salary in RUR is not specified in any processed listing\n\
         Total found according to the API: 0 listings\n"
    );
}

#[test]
fn test_render_pretty_aborted_keeps_partial_results() {
    let text = render_pretty(&report(
        Some(100.0),
        RunOutcome::Aborted {
            page: 1,
            message: "HTTP 503: unavailable".to_string(),
        },
    ));

    assert!(text.contains("Run aborted while requesting page 2: HTTP 503: unavailable"));
    assert!(text.contains("Average salary: 100 RUR"));
}

#[test]
fn test_render_pretty_uncaptured_found_is_zero() {
    let mut r = report(Some(10.0), RunOutcome::terminated(TerminationReason::LastPage));
    r.summary.found_total = None;
    assert!(render_pretty(&r).contains("Total found according to the API: 0 listings"));
}

#[test]
fn test_render_json() {
    let json = render_json(
        "C#",
        &report(Some(1500.0), RunOutcome::terminated(TerminationReason::LastPage)),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["query"], "C#");
    assert_eq!(value["currency"], "RUR");
    assert_eq!(value["average"], 1500.0);
    assert_eq!(value["processed_with_salary"], 1);
    assert_eq!(value["found_total"], 2);
    assert_eq!(value["outcome"]["status"], "terminated");
    assert_eq!(value["outcome"]["reason"], "last_page");
    assert_eq!(value["stats"]["pages_skipped"], 0);
    assert!(value["generated_at"].is_string());
}

#[test]
fn test_render_json_empty_and_aborted() {
    let json = render_json(
        "rust",
        &report(
            None,
            RunOutcome::Aborted {
                page: 0,
                message: "boom".to_string(),
            },
        ),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value["average"].is_null());
    assert_eq!(value["outcome"]["status"], "aborted");
    assert_eq!(value["outcome"]["page"], 0);
    assert_eq!(value["outcome"]["message"], "boom");
}
