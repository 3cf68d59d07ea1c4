//! Human-readable colored text formatter.
//!
//! Produces a terminal-friendly report with ANSI color codes, showing each
//! route with a pass/fail marker, the individual check results with their
//! remarks, and a one-line summary.

use crate::report::{BatchReport, CheckStatus};
use colored::Colorize;

/// Formats a [`BatchReport`] as human-readable, ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header** — input source, route count, and timestamp.
/// 2. **Routes** — per-route marker with per-check status and remarks.
/// 3. **Summary** — overall verdict and pass/fail counts.
pub fn format(report: &BatchReport) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "\n{}\n",
        format!(
            "  Route Validation: {}  ({} routes)  ",
            report.source,
            report.route_count()
        )
        .bold()
        .on_blue()
        .white()
    ));
    out.push_str(&format!("  Timestamp: {}\n\n", report.timestamp));

    // Per-route results
    out.push_str(&format!("{}\n", "Routes".bold().underline()));
    for route in &report.routes {
        let marker = if route.passed {
            "✓".green().to_string()
        } else {
            "✗".red().to_string()
        };

        out.push_str(&format!(
            "  {marker} Route '{name}' (Destination: {dest})\n",
            name = route.display_name(),
            dest = route.destination.as_deref().unwrap_or("<none>"),
        ));

        for result in &route.results {
            let status_str = match result.status {
                CheckStatus::Pass => "PASS".green().bold().to_string(),
                CheckStatus::Failed => "FAIL".red().bold().to_string(),
            };
            out.push_str(&format!(
                "      [{status_str}] {check:<26} {remarks}\n",
                check = result.check_name,
                remarks = result.remarks_line().dimmed(),
            ));
        }
    }
    out.push('\n');

    // Summary
    let verdict = if report.passed {
        "PASSED".green().bold().to_string()
    } else {
        "FAILED".red().bold().to_string()
    };

    // Single pass for both counters.
    let (passed, failed) = report.count_by_status();
    out.push_str(&format!(
        "Result: {verdict}  |  {} checks passed, {} failed, {} of {} routes invalid\n",
        passed,
        failed,
        report.failed_route_count(),
        report.route_count(),
    ));

    out
}
