//! # routelint
//!
//! Naming-convention and filter-syntax linting for routing platform
//! configuration records.
//!
//! `routelint` takes a batch of route definitions (JSON), checks each one
//! against a small fixed rule set — a destination-specific naming convention
//! and a staged filter expression validator — and produces a pass/fail report
//! in human-readable, JSON, or fixed-width table formats.
//!
//! ## Quick start
//!
//! ```rust
//! use routelint::{config::Config, output, validate};
//!
//! let routes = vec![serde_json::json!({
//!     "name": "NEO AUTO - nmp_prod (NEO Output Router)",
//!     "destination": "opensearch-prod",
//!     "filter": "index == 'nmp_prod' && __inputId == 'splunk:in_splunk_tcp'"
//! })];
//!
//! let config = Config::default();
//! let report = validate::run_validation("routes.json", &routes, &config);
//!
//! if report.passed {
//!     println!("All routes passed!");
//! } else {
//!     let text = output::format_report(&report, &output::OutputFormat::Pretty);
//!     print!("{text}");
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline:
//!
//! 1. **[`config`]** — load and validate configuration from TOML files
//!    (field-name mapping, rule-revision policy, filter limits).
//! 2. **[`route`]** — extract [`route::RouteRecord`]s from raw JSON values.
//! 3. **[`checkers`]** — pluggable [`checkers::Checker`] trait with the two
//!    built-in implementations (naming, filter).
//! 4. **[`validate`]** — orchestrate checkers across the batch and collect
//!    results, containing any checker panic per route.
//! 5. **[`report`]** — core data types ([`report::CheckResult`],
//!    [`report::BatchReport`]).
//! 6. **[`output`]** — format reports as pretty text, JSON rows, or a
//!    fixed-width table.
//!
//! ## Checkers
//!
//! | Checker | Description |
//! |---------|-------------|
//! | `naming` | Destination-specific route name prefix/suffix convention |
//! | `filter` | Staged filter expression syntax and mandatory-clause checks |
//!
//! Both checkers are pure, stateless functions of the route record and the
//! configuration: the same record always produces the same result.

pub mod checkers;
pub mod config;
pub mod output;
pub mod report;
pub mod route;
pub mod validate;
