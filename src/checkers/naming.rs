//! Route naming convention checker.
//!
//! Classifies a route by its destination label and checks the display name
//! against the destination-specific prefix/suffix convention. This is a
//! built-in checker with no external dependencies.
//!
//! # Rules
//!
//! | ID | Sev | What it checks |
//! |----|-----|----------------|
//! | `naming/opensearch-format` | Error | `NEO AUTO - <tenant> (NEO Output Router)` |
//! | `naming/splunk-format` | Error | `SPLUNK - <tenant>` prefix |
//! | `naming/unknown-destination` | Error | Destination matches a known keyword |
//! | `naming/missing-destination` | Error | Destination field must be present |
//!
//! Destination keyword matching is case-insensitive; the name prefix/suffix
//! comparison is case-sensitive. Both fields are trimmed before comparison.

use crate::config::Config;
use crate::report::CheckResult;
use crate::route::RouteRecord;
use crate::checkers::{Checker, RuleInfo};

pub const CHECK_NAME: &str = "Route Naming Convention";

const OPENSEARCH_PREFIX: &str = "NEO AUTO - ";
const OPENSEARCH_SUFFIX: &str = "(NEO Output Router)";
const OPENSEARCH_FORMAT: &str = "NEO AUTO - <tenant> (NEO Output Router)";

const SPLUNK_PREFIX: &str = "SPLUNK - ";
const SPLUNK_FORMAT: &str = "SPLUNK - <tenant>";

const PASS_REMARK: &str = "Route name matches the naming convention.";

/// Known destination families, in classification precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Destination {
    OpenSearch,
    Splunk,
}

/// Classifies a destination label by case-insensitive substring containment.
///
/// The keyword list is ordered; the first match wins, so a label containing
/// both keywords classifies as OpenSearch.
fn classify(destination: &str) -> Option<Destination> {
    const KEYWORDS: &[(&str, Destination)] = &[
        ("opensearch", Destination::OpenSearch),
        ("splunk", Destination::Splunk),
    ];

    let lower = destination.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, dest)| *dest)
}

/// Built-in checker for destination-specific route naming conventions.
///
/// See the [module-level documentation](self) for the rule table.
pub struct NamingChecker;

impl Checker for NamingChecker {
    fn name(&self) -> &'static str {
        "naming"
    }

    fn check_name(&self) -> &'static str {
        CHECK_NAME
    }

    fn description(&self) -> &'static str {
        "Destination-specific route naming convention"
    }

    fn check(&self, route: &RouteRecord, config: &Config) -> CheckResult {
        let name = route.name.as_deref().unwrap_or("").trim();
        let destination = route.destination.as_deref().unwrap_or("").trim();

        if destination.is_empty() {
            return CheckResult::failed(
                CHECK_NAME,
                vec![format!(
                    "Route '{name}' has no destination; naming rules cannot be applied."
                )],
            );
        }

        match classify(destination) {
            Some(Destination::OpenSearch) => {
                // Both the prefix and the suffix are required; a partial match fails.
                if name.starts_with(OPENSEARCH_PREFIX) && name.ends_with(OPENSEARCH_SUFFIX) {
                    CheckResult::pass(CHECK_NAME, PASS_REMARK)
                } else {
                    CheckResult::failed(
                        CHECK_NAME,
                        vec![format!(
                            "Route '{name}' is invalid for OpenSearch destination \
                             '{destination}'. Expected format: '{OPENSEARCH_FORMAT}'."
                        )],
                    )
                }
            }
            Some(Destination::Splunk) => {
                if name.starts_with(SPLUNK_PREFIX) {
                    CheckResult::pass(CHECK_NAME, PASS_REMARK)
                } else {
                    CheckResult::failed(
                        CHECK_NAME,
                        vec![format!(
                            "Route '{name}' is invalid for Splunk destination \
                             '{destination}'. Expected format: '{SPLUNK_FORMAT}'."
                        )],
                    )
                }
            }
            None => {
                if config.policy.unknown_destination_fails {
                    CheckResult::failed(
                        CHECK_NAME,
                        vec![format!(
                            "Destination '{destination}' is not supported for naming validation."
                        )],
                    )
                } else {
                    CheckResult::pass(
                        CHECK_NAME,
                        &format!("Destination '{destination}' not recognized; no naming rules applied."),
                    )
                }
            }
        }
    }
}

/// Returns the [`RuleInfo`] catalogue for every naming rule.
pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: "naming/opensearch-format",
            severity: "error",
            checker: "naming",
            message: "OpenSearch route names must match 'NEO AUTO - <tenant> (NEO Output Router)'",
            remediation: "Rename the route to 'NEO AUTO - <tenant> (NEO Output Router)'",
        },
        RuleInfo {
            id: "naming/splunk-format",
            severity: "error",
            checker: "naming",
            message: "Splunk route names must start with 'SPLUNK - '",
            remediation: "Rename the route to 'SPLUNK - <tenant>'",
        },
        RuleInfo {
            id: "naming/unknown-destination",
            severity: "error",
            checker: "naming",
            message: "Destination matches no known keyword (opensearch, splunk)",
            remediation: "Use a supported destination, or run with --legacy to skip unknown destinations",
        },
        RuleInfo {
            id: "naming/missing-destination",
            severity: "error",
            checker: "naming",
            message: "Route record has no destination field",
            remediation: "Add a destination field to the route record",
        },
    ]
}
