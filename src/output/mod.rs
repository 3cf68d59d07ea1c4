//! Output formatting for validation reports.
//!
//! Three formats are supported:
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting  |
//! | [`Table`](OutputFormat::Table)   | [`table`]  | Fixed-width text report |
//!
//! Use [`format_report`] to render a [`BatchReport`] in any of the above
//! formats.

pub mod json;
pub mod pretty;
pub mod table;

use crate::report::BatchReport;

/// Supported output formats for validation reports.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text with per-route sections.
    Pretty,
    /// Machine-readable JSON rows (`No` / `Check Name` / `Status` / `Remarks`).
    Json,
    /// Fixed-width text table mirroring the JSON rows.
    Table,
}

/// Formats a [`BatchReport`] in the requested [`OutputFormat`].
///
/// # Examples
///
/// ```rust,no_run
/// use routelint::output::{format_report, OutputFormat};
/// # use routelint::report::BatchReport;
/// # fn example(report: &BatchReport) {
/// let json = format_report(report, &OutputFormat::Json);
/// println!("{json}");
/// # }
/// ```
pub fn format_report(report: &BatchReport, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format(report),
        OutputFormat::Json => json::format(report),
        OutputFormat::Table => table::format(report),
    }
}
