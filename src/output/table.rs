//! Fixed-width text table formatter.
//!
//! Mirrors the JSON report rows as a plain-text table with the header
//! `No. | Check Name | Status | Remarks`, suitable for log files and
//! plain-text attachments. Column widths grow to fit the content; remarks
//! collapse to a single `" ; "`-joined line.

use crate::output::json;
use crate::report::BatchReport;

const HEADERS: [&str; 4] = ["No.", "Check Name", "Status", "Remarks"];

/// Formats a [`BatchReport`] as a fixed-width text table.
pub fn format(report: &BatchReport) -> String {
    let rows: Vec<[String; 4]> = json::rows(report)
        .into_iter()
        .map(|row| {
            [
                row.no.to_string(),
                row.check_name.clone(),
                row.status.to_string(),
                row.into_result().remarks_line(),
            ]
        })
        .collect();

    // Column widths: the widest of the header and every cell.
    let mut widths: [usize; 4] = [0; 4];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.chars().count();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_line(&HEADERS.map(String::from), &widths));
    out.push_str(&separator_line(&widths));
    for row in &rows {
        out.push_str(&format_line(row, &widths));
    }
    out
}

fn format_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    format!("{}\n", padded.join(" | ").trim_end())
}

fn separator_line(widths: &[usize; 4]) -> String {
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    format!("{}\n", dashes.join("-+-"))
}
