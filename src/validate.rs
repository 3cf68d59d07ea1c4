//! Batch validation orchestration.
//!
//! The [`run_validation`] function is the main entry-point for validating a
//! batch of route records. It loads all enabled
//! [`Checker`](crate::checkers::Checker) implementations, fans the routes out
//! in parallel via [rayon], contains any checker panic as a per-route
//! failure, and produces a final [`BatchReport`].

use crate::checkers::{self, Checker};
use crate::config::Config;
use crate::report::{BatchReport, CheckResult, RouteReport};
use crate::route::RouteRecord;
use rayon::prelude::*;
use serde_json::Value;
use std::panic::{self, AssertUnwindSafe};

/// Validates a batch of raw route values and assembles the report.
///
/// # Pipeline
///
/// 1. Loads every registered [`Checker`](crate::checkers::Checker).
/// 2. Filters down to those enabled in [`Config::checkers`](crate::config::Config::checkers).
/// 3. Extracts a [`RouteRecord`] per raw value via the configured field mapping.
/// 4. Runs the active checkers per route, routes **in parallel** using
///    [rayon]. Report order follows input order.
/// 5. Assembles the final [`BatchReport`].
///
/// One route's failure never prevents evaluation of the other routes.
///
/// # Examples
///
/// ```rust
/// use routelint::{config::Config, validate};
///
/// let routes = vec![serde_json::json!({
///     "name": "SPLUNK - hiport",
///     "destination": "splunk",
///     "filter": "index == 'hiport' && __inputId == 'hec:token'"
/// })];
///
/// let report = validate::run_validation("routes.json", &routes, &Config::default());
/// assert!(report.passed);
/// ```
pub fn run_validation(source: &str, raw_routes: &[Value], config: &Config) -> BatchReport {
    let all = checkers::all_checkers();

    let active: Vec<_> = all
        .into_iter()
        .filter(|c| config.is_checker_enabled(c.name()))
        .collect();

    let routes: Vec<RouteReport> = raw_routes
        .par_iter()
        .map(|raw| {
            let record = RouteRecord::from_value(raw, &config.fields);
            let results: Vec<CheckResult> = active
                .iter()
                .map(|checker| run_checker(checker.as_ref(), &record, config))
                .collect();
            RouteReport::from_results(record.name.clone(), record.destination.clone(), results)
        })
        .collect();

    BatchReport::from_routes(source, routes)
}

/// Runs one checker against one record, containing panics.
///
/// Checkers are written to return `Failed` results for malformed input, but
/// a panic must not take the batch down with it: it is caught here and
/// converted into a `Failed` result carrying the panic description, and
/// processing continues with the next route.
fn run_checker(checker: &dyn Checker, record: &RouteRecord, config: &Config) -> CheckResult {
    match panic::catch_unwind(AssertUnwindSafe(|| checker.check(record, config))) {
        Ok(result) => result,
        Err(payload) => {
            let description = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            CheckResult::failed(
                checker.check_name(),
                vec![format!("Checker crashed: {description}")],
            )
        }
    }
}
