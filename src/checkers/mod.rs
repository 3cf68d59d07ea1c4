//! Pluggable route checkers.
//!
//! Every checker implements the [`Checker`] trait. Both built-in checkers
//! are pure functions of the route record and the configuration:
//!
//! - [`naming`] — destination-specific route naming convention.
//! - [`filter`] — staged lexical/structural validation of the filter
//!   expression, including mandatory-clause detection.
//!
//! Use [`all_checkers`] to obtain all registered checkers and [`all_rules`]
//! to list every rule they define.

pub mod filter;
pub mod naming;

use crate::config::Config;
use crate::report::CheckResult;
use crate::route::RouteRecord;

/// A pluggable route checker.
///
/// Implementers **must** be [`Send`] + [`Sync`] because
/// [`validate::run_validation`](crate::validate::run_validation) fans routes
/// out across threads via [rayon].
///
/// A checker must run to a definite Pass/Failed conclusion for every input:
/// missing or malformed record fields become `Failed` results with an
/// explanatory remark, never panics.
pub trait Checker: Send + Sync {
    /// Returns the checker's unique identifier (e.g. `"naming"`, `"filter"`).
    fn name(&self) -> &'static str;

    /// Returns the check name used in report rows
    /// (e.g. `"Route Naming Convention"`).
    fn check_name(&self) -> &'static str;

    /// Returns a short, human-readable description of the checker.
    fn description(&self) -> &'static str;

    /// Executes the check against one route record.
    fn check(&self, route: &RouteRecord, config: &Config) -> CheckResult;
}

/// Returns every registered [`Checker`] implementation.
///
/// The returned order is the order in which results appear per route in
/// the report.
pub fn all_checkers() -> Vec<Box<dyn Checker>> {
    vec![
        Box::new(naming::NamingChecker),
        Box::new(filter::FilterChecker),
    ]
}

/// Metadata for a single validation rule.
///
/// Returned by [`all_rules`] and used by the `list-checks` and `explain`
/// CLI commands. Each checker module exposes a `rules()` function that
/// returns a `Vec<RuleInfo>`.
pub struct RuleInfo {
    /// Unique rule identifier (e.g. `"naming/opensearch-format"`).
    pub id: &'static str,
    /// Severity as a string (`"error"`, `"warning"`).
    pub severity: &'static str,
    /// Checker that detects this rule.
    pub checker: &'static str,
    /// Short description of what the rule checks.
    pub message: &'static str,
    /// Guidance on how to fix a violation.
    pub remediation: &'static str,
}

/// Aggregates [`RuleInfo`] from every checker module.
///
/// Useful for building rule-listing and rule-explanation UIs.
pub fn all_rules() -> Vec<RuleInfo> {
    let mut rules = Vec::new();
    rules.extend(naming::rules());
    rules.extend(filter::rules());
    rules
}
