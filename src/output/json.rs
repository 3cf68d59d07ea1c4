//! JSON output formatter.
//!
//! Produces a pretty-printed JSON array of report rows, one per check per
//! route, numbered sequentially across the whole batch in input order.

use crate::report::{BatchReport, CheckResult, CheckStatus};

/// One flat report row.
///
/// The external key spelling (`No`, `Check Name`, `Status`, `Remarks`) is the
/// report contract consumed by downstream tooling; keep it stable.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReportRow {
    #[serde(rename = "No")]
    pub no: usize,
    #[serde(rename = "Check Name")]
    pub check_name: String,
    #[serde(rename = "Status")]
    pub status: CheckStatus,
    #[serde(rename = "Remarks")]
    pub remarks: Vec<String>,
}

impl ReportRow {
    /// Converts the row back into the check result it was built from.
    /// Status and remarks survive the round trip exactly.
    pub fn into_result(self) -> CheckResult {
        CheckResult {
            check_name: self.check_name,
            status: self.status,
            remarks: self.remarks,
        }
    }
}

/// Flattens a report into numbered rows, one per check per route.
///
/// Numbering starts at 1 and follows input order; it lives here rather than
/// in the checkers so the core stays free of cross-check sequencing.
pub fn rows(report: &BatchReport) -> Vec<ReportRow> {
    report
        .routes
        .iter()
        .flat_map(|route| &route.results)
        .enumerate()
        .map(|(i, result)| ReportRow {
            no: i + 1,
            check_name: result.check_name.clone(),
            status: result.status,
            remarks: result.remarks.clone(),
        })
        .collect()
}

/// Formats a [`BatchReport`] as a pretty-printed JSON array of rows.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &BatchReport) -> String {
    serde_json::to_string_pretty(&rows(report)).expect("JSON serialization failed")
}
