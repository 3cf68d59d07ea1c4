use routelint::checkers::naming::NamingChecker;
use routelint::checkers::Checker;
use routelint::config::Config;
use routelint::report::{CheckResult, CheckStatus};
use routelint::route::RouteRecord;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn route(name: Option<&str>, destination: Option<&str>) -> RouteRecord {
    RouteRecord {
        name: name.map(str::to_string),
        destination: destination.map(str::to_string),
        filter: None,
    }
}

fn check(name: Option<&str>, destination: Option<&str>) -> CheckResult {
    NamingChecker.check(&route(name, destination), &Config::default())
}

// ---------------------------------------------------------------------------
// OpenSearch destinations
// ---------------------------------------------------------------------------

#[test]
fn opensearch_valid_name_passes() {
    let result = check(
        Some("NEO AUTO - nmp_dev (NEO Output Router)"),
        Some("opensearch"),
    );
    assert_eq!(result.status, CheckStatus::Pass);
}

#[test]
fn opensearch_destination_keyword_is_case_insensitive() {
    let result = check(
        Some("NEO AUTO - nmp_dev (NEO Output Router)"),
        Some("OpenSearch-Prod-Cluster"),
    );
    assert_eq!(result.status, CheckStatus::Pass);
}

#[test]
fn opensearch_missing_prefix_fails() {
    let result = check(Some("AUTO - nmp_dev (NEO Output Router)"), Some("opensearch"));
    assert_eq!(result.status, CheckStatus::Failed);
}

#[test]
fn opensearch_missing_suffix_fails() {
    let result = check(Some("NEO AUTO - nmp_dev"), Some("opensearch"));
    assert_eq!(result.status, CheckStatus::Failed);
}

#[test]
fn opensearch_name_prefix_is_case_sensitive() {
    let result = check(
        Some("neo auto - nmp_dev (NEO Output Router)"),
        Some("opensearch"),
    );
    assert_eq!(result.status, CheckStatus::Failed);
}

#[test]
fn opensearch_failure_names_route_destination_and_format() {
    let result = check(Some("bad name"), Some("opensearch"));
    let remark = result.remarks_line();
    assert!(remark.contains("bad name"), "remark should name the route");
    assert!(remark.contains("opensearch"), "remark should name the destination");
    assert!(
        remark.contains("NEO AUTO - <tenant> (NEO Output Router)"),
        "remark should state the expected format"
    );
}

#[test]
fn empty_name_fails_for_opensearch() {
    let result = check(Some(""), Some("opensearch"));
    assert_eq!(result.status, CheckStatus::Failed);
}

#[test]
fn missing_name_fails_for_opensearch() {
    let result = check(None, Some("opensearch"));
    assert_eq!(result.status, CheckStatus::Failed);
}

// ---------------------------------------------------------------------------
// Splunk destinations
// ---------------------------------------------------------------------------

#[test]
fn splunk_valid_name_passes() {
    let result = check(Some("SPLUNK - hiport"), Some("splunk"));
    assert_eq!(result.status, CheckStatus::Pass);
}

#[test]
fn splunk_suffix_is_unconstrained() {
    let result = check(Some("SPLUNK - hiport (whatever)"), Some("Splunk Cloud"));
    assert_eq!(result.status, CheckStatus::Pass);
}

#[test]
fn splunk_prefix_is_case_sensitive() {
    let result = check(Some("Splunk - hiport"), Some("splunk"));
    assert_eq!(result.status, CheckStatus::Failed);
}

#[test]
fn splunk_failure_states_expected_format() {
    let result = check(Some("hiport"), Some("splunk"));
    assert!(result.remarks_line().contains("SPLUNK - <tenant>"));
}

// ---------------------------------------------------------------------------
// Classification precedence and trimming
// ---------------------------------------------------------------------------

#[test]
fn opensearch_wins_when_both_keywords_appear() {
    // "opensearch" is first in the keyword list, so a Splunk-style name must
    // fail against the OpenSearch convention.
    let result = check(Some("SPLUNK - hiport"), Some("opensearch-to-splunk-bridge"));
    assert_eq!(result.status, CheckStatus::Failed);

    let result = check(
        Some("NEO AUTO - x (NEO Output Router)"),
        Some("opensearch-to-splunk-bridge"),
    );
    assert_eq!(result.status, CheckStatus::Pass);
}

#[test]
fn name_and_destination_are_trimmed() {
    let result = check(Some("  SPLUNK - hiport  "), Some("  splunk  "));
    assert_eq!(result.status, CheckStatus::Pass);
}

// ---------------------------------------------------------------------------
// Unknown and missing destinations
// ---------------------------------------------------------------------------

#[test]
fn unknown_destination_fails_by_default() {
    let result = check(Some("anything"), Some("kafka"));
    assert_eq!(result.status, CheckStatus::Failed);
    assert!(result.remarks_line().contains("not supported"));
}

#[test]
fn unknown_destination_skipped_under_legacy_policy() {
    let mut config = Config::default();
    config.apply_legacy();

    let result = NamingChecker.check(&route(Some("anything"), Some("kafka")), &config);
    assert_eq!(result.status, CheckStatus::Pass);
    assert!(result.remarks_line().contains("no naming rules applied"));
}

#[test]
fn missing_destination_fails() {
    let result = check(Some("SPLUNK - hiport"), None);
    assert_eq!(result.status, CheckStatus::Failed);
    assert!(result.remarks_line().contains("no destination"));
}

#[test]
fn blank_destination_fails() {
    let result = check(Some("SPLUNK - hiport"), Some("   "));
    assert_eq!(result.status, CheckStatus::Failed);
}

// ---------------------------------------------------------------------------
// Purity
// ---------------------------------------------------------------------------

#[test]
fn repeated_checks_yield_identical_results() {
    let record = route(Some("bad name"), Some("opensearch"));
    let config = Config::default();
    let first = NamingChecker.check(&record, &config);
    let second = NamingChecker.check(&record, &config);
    assert_eq!(first, second);
}
