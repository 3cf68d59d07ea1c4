use assert_cmd::Command;
use predicates::prelude::*;

fn routelint() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("routelint")
}

#[test]
fn validate_clean_batch_passes() {
    routelint()
        .args(["validate", "tests/fixtures/routes_clean.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED"));
}

#[test]
fn validate_dirty_batch_fails() {
    routelint()
        .args(["validate", "tests/fixtures/routes_dirty.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAILED"));
}

#[test]
fn route_name_fallback_key_is_used() {
    // The second dirty route only carries "routeName"; the pretty report
    // must still show its display name.
    routelint()
        .args(["validate", "tests/fixtures/routes_dirty.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("SPLUNK - ok"));
}

#[test]
fn mixed_batch_reports_both_routes_and_fails() {
    // One broken route never prevents evaluation of the others.
    routelint()
        .args(["validate", "tests/fixtures/routes_mixed.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("nmp_dev"))
        .stdout(predicate::str::contains("SPLUNK - broken"));
}

#[test]
fn dirty_batch_json_format() {
    routelint()
        .args([
            "validate",
            "tests/fixtures/routes_dirty.json",
            "--format",
            "json",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"Status\": \"Failed\""));
}

#[test]
fn dirty_batch_table_format() {
    routelint()
        .args([
            "validate",
            "tests/fixtures/routes_dirty.json",
            "--format",
            "table",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No."))
        .stdout(predicate::str::contains("Check Name"))
        .stdout(predicate::str::contains("Remarks"));
}

#[test]
fn single_route_object_is_accepted() {
    routelint()
        .args(["validate", "tests/fixtures/route_single.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SPLUNK - single"));
}

#[test]
fn legacy_flag_applies_earlier_revision() {
    // Unknown destination plus a filter without __inputId: fails under the
    // default policy, passes under --legacy.
    routelint()
        .args(["validate", "tests/fixtures/routes_legacy.json"])
        .assert()
        .code(1);

    routelint()
        .args(["validate", "tests/fixtures/routes_legacy.json", "--legacy"])
        .assert()
        .success();
}

#[test]
fn nonexistent_path_exits_2() {
    routelint()
        .args(["validate", "tests/fixtures/does-not-exist.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn malformed_json_exits_2() {
    routelint()
        .args(["validate", "tests/fixtures/malformed.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn top_level_scalar_exits_2() {
    routelint()
        .args(["validate", "tests/fixtures/scalar.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("array of route objects"));
}

#[test]
fn output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let output_file = dir.path().join("report.json");

    routelint()
        .args([
            "validate",
            "tests/fixtures/routes_dirty.json",
            "--format",
            "json",
            "--output",
            output_file.to_str().unwrap(),
        ])
        .assert()
        .code(1);

    let content = std::fs::read_to_string(&output_file).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("Output file should contain valid JSON");
    assert!(parsed.as_array().unwrap().len() >= 6);
}

#[test]
fn custom_config_overrides_filter_limits() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = dir.path().join("routelint.toml");
    std::fs::write(&config_file, "[filter]\nmax_length = 10\n").unwrap();

    routelint()
        .args([
            "validate",
            "tests/fixtures/routes_clean.json",
            "--config",
            config_file.to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("maximum is 10"));
}

#[test]
fn missing_config_exits_2() {
    routelint()
        .args([
            "validate",
            "tests/fixtures/routes_clean.json",
            "--config",
            "does-not-exist.toml",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn list_checks_shows_rules() {
    routelint()
        .args(["list-checks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("naming/opensearch-format"))
        .stdout(predicate::str::contains("filter/index-missing"))
        .stdout(predicate::str::contains("filter/input-id-missing"));
}

#[test]
fn explain_known_rule() {
    routelint()
        .args(["explain", "filter/index-wildcard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("filter/index-wildcard"))
        .stdout(predicate::str::contains("Remediation"));
}

#[test]
fn explain_unknown_rule_exits_2() {
    routelint()
        .args(["explain", "nonexistent/rule"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown rule"));
}
