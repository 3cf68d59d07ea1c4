//! Filter expression checker.
//!
//! Runs a fixed pipeline of lexical and structural checks over the route's
//! free-text filter expression, culminating in mandatory-clause detection.
//! The pipeline is fail-fast: once a stage fails, no further stages execute
//! and only that stage's message is reported. Warnings (from unquoted
//! right-hand sides) accumulate locally and surface only on an overall pass.
//!
//! # Stages
//!
//! | # | Stage | Input |
//! |---|-------|-------|
//! | 1 | Presence (key exists, string, non-blank) | raw value |
//! | 2 | Length bound | trimmed |
//! | 3 | Forbidden characters | trimmed |
//! | 4 | Balanced quotation (escape-aware) | trimmed |
//! | 5 | Balanced parentheses (count-only) | trimmed |
//! | 6 | Operator sanity (`in`, `=`, `&`, `\|`, dangling, `&& \|\|`) | trimmed |
//! | 7 | Whitespace normalization | trimmed |
//! | 8 | Index-clause detection | normalized |
//! | 9 | Mandatory `__inputId` clause (policy-gated) | normalized |
//!
//! Stage order matters: the structural matches of stages 8 and 9 assume the
//! forbidden characters and operator anomalies screened out earlier are
//! absent. Do not reorder.
//!
//! Keyword matching (`index`, `in`, `includes`, `__inputId`) is
//! case-insensitive; quoted literal values keep their case.

use crate::checkers::{Checker, RuleInfo};
use crate::config::Config;
use crate::report::CheckResult;
use crate::route::RouteRecord;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

pub const CHECK_NAME: &str = "Route Filter Validation";

const PASS_REMARK: &str = "Filter expression passed all syntax checks.";

// ---------------------------------------------------------------------------
// Static regexes
// ---------------------------------------------------------------------------

/// Whitespace runs, collapsed to single spaces before structural matching.
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// The SQL-style `in` membership operator. The word must be surrounded by
/// literal single spaces to match; `index` and `includes` never trigger it.
static RE_IN_OPERATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i) in ").unwrap());

/// Adjacent `&& ||` or `|| &&`, with any whitespace between them.
static RE_BOOLEAN_SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&&\s*\|\||\|\|\s*&&").unwrap());

/// Quoted index comparison: `index <op> '<value>'` or `index <op> "<value>"`.
static RE_INDEX_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bindex\s*(==|!=|>=|<=|>|<)\s*(?:'([^']*)'|"([^"]*)")"#).unwrap()
});

/// Unquoted index comparison with a token restricted to letters, digits,
/// `_`, `.`, `-`. The trailing class anchors the token end so a token with
/// embedded punctuation (e.g. a wildcard) falls through to the catch-all.
static RE_INDEX_UNQUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bindex\s*(==|!=|>=|<=|>|<)\s*([A-Za-z0-9_.\-]+)(?:[\s)&|]|$)").unwrap()
});

/// Membership form with a quoted argument: `index.includes('<value>')`.
static RE_INCLUDES_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bindex\s*\.\s*includes\s*\(\s*(?:'([^']*)'|"([^"]*)")\s*\)"#).unwrap()
});

/// Membership form with an unquoted argument, tolerated with a warning.
static RE_INCLUDES_UNQUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bindex\s*\.\s*includes\s*\(\s*([A-Za-z0-9_.\-]+)\s*\)").unwrap()
});

/// Catch-all for any index comparison whose right-hand side was not matched
/// by the quoted or unquoted forms above.
static RE_INDEX_ANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bindex\s*(==|!=|>=|<=|>|<)\s*(\S+)").unwrap());

/// Mandatory secondary clause: `__inputId == <value>`.
static RE_INPUT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)__inputid\s*==\s*\S+").unwrap());

// ---------------------------------------------------------------------------
// Pipeline stages
// ---------------------------------------------------------------------------

/// Stage 2: the trimmed filter must not exceed the configured length bound.
fn length_bound(filter: &str, max_length: usize) -> Result<(), String> {
    let length = filter.chars().count();
    if length > max_length {
        return Err(format!(
            "Filter expression is {length} characters long; the maximum is {max_length}."
        ));
    }
    Ok(())
}

/// Stage 3: none of the configured forbidden characters may appear.
///
/// Violations are listed in the order of the forbidden list, not the order
/// of occurrence in the filter.
fn forbidden_characters(filter: &str, forbidden: &[char]) -> Result<(), String> {
    let found: Vec<String> = forbidden
        .iter()
        .filter(|c| filter.contains(**c))
        .map(|c| format!("{c:?}"))
        .collect();

    if found.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "Filter contains forbidden characters: {}.",
            found.join(", ")
        ))
    }
}

/// Stage 4: single and double quotes must each occur an even number of times.
///
/// A backslash consumes the following character entirely, so escaped quotes
/// are skipped (scanning advances two positions on encountering a backslash).
fn balanced_quotes(filter: &str) -> Result<(), String> {
    let mut singles = 0usize;
    let mut doubles = 0usize;

    let mut chars = filter.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '\'' => singles += 1,
            '"' => doubles += 1,
            _ => {}
        }
    }

    if singles % 2 != 0 {
        Err("Filter has an unbalanced number of single quotes.".to_string())
    } else if doubles % 2 != 0 {
        Err("Filter has an unbalanced number of double quotes.".to_string())
    } else {
        Ok(())
    }
}

/// Stage 5: the count of `(` must equal the count of `)`.
///
/// Totals only; nesting order is not verified, so `)(` is accepted. Known
/// limitation of the rule.
fn balanced_parentheses(filter: &str) -> Result<(), String> {
    let (open, close) = filter.chars().fold((0usize, 0usize), |(o, c), ch| match ch {
        '(' => (o + 1, c),
        ')' => (o, c + 1),
        _ => (o, c),
    });

    if open != close {
        return Err(format!(
            "Filter has unbalanced parentheses: {open} opening vs {close} closing."
        ));
    }
    Ok(())
}

/// Stage 6: operator sanity checks, each run independently against the
/// original (trimmed, un-normalized) string.
fn operator_sanity(filter: &str) -> Result<(), String> {
    if RE_IN_OPERATOR.is_match(filter) {
        return Err(
            "The 'in' membership operator is not supported; use index.includes(...) instead."
                .to_string(),
        );
    }

    // Byte scan is safe here: the operator characters are ASCII and UTF-8
    // continuation bytes never collide with them.
    let bytes = filter.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        let prev = if i > 0 { bytes[i - 1] } else { 0 };
        let next = bytes.get(i + 1).copied().unwrap_or(0);
        match b {
            b'=' => {
                if !matches!(prev, b'=' | b'!' | b'<' | b'>') && next != b'=' {
                    return Err(
                        "Single '=' is not a valid operator; use '==' for equality comparison."
                            .to_string(),
                    );
                }
            }
            b'&' => {
                if prev != b'&' && next != b'&' {
                    return Err(
                        "Single '&' is not a valid operator; use '&&' for logical AND."
                            .to_string(),
                    );
                }
            }
            b'|' => {
                if prev != b'|' && next != b'|' {
                    return Err(
                        "Single '|' is not a valid operator; use '||' for logical OR.".to_string(),
                    );
                }
            }
            _ => {}
        }
    }

    if filter.trim_end().ends_with("&&") || filter.trim_end().ends_with("||") {
        return Err("Filter ends with a dangling boolean operator.".to_string());
    }

    if RE_BOOLEAN_SEQUENCE.is_match(filter) {
        return Err("Adjacent '&&' and '||' form an invalid boolean sequence.".to_string());
    }

    Ok(())
}

/// Stage 8: the filter must contain an accepted index clause.
///
/// Accepted forms, in precedence order: a quoted comparison, an unquoted
/// comparison (warning), a quoted `includes` call, and an unquoted
/// `includes` call (warning). Quoted values must not contain `*`. A final
/// catch-all flags any remaining `index <op> <token>` as malformed.
fn index_clause(normalized: &str, warnings: &mut Vec<String>) -> Result<(), String> {
    if let Some(caps) = RE_INDEX_QUOTED.captures(normalized) {
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map(|m| m.as_str())
            .unwrap_or("");
        if value.contains('*') {
            return Err(format!(
                "Wildcard '*' is not allowed in the index value '{value}'."
            ));
        }
        return Ok(());
    }

    if let Some(caps) = RE_INDEX_UNQUOTED.captures(normalized) {
        warnings.push(format!(
            "Index value '{}' is unquoted; quoting the value is recommended.",
            &caps[2]
        ));
        return Ok(());
    }

    if let Some(caps) = RE_INCLUDES_QUOTED.captures(normalized) {
        let value = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or("");
        if value.contains('*') {
            return Err(format!(
                "Wildcard '*' is not allowed in the index value '{value}'."
            ));
        }
        return Ok(());
    }

    if let Some(caps) = RE_INCLUDES_UNQUOTED.captures(normalized) {
        warnings.push(format!(
            "index.includes() argument '{}' is unquoted; quoting the value is recommended.",
            &caps[1]
        ));
        return Ok(());
    }

    if let Some(caps) = RE_INDEX_ANY.captures(normalized) {
        let token = &caps[2];
        if token.contains('*') {
            return Err(format!(
                "Malformed index comparison: wildcard '*' is not allowed in '{token}'."
            ));
        }
        return Err(format!(
            "Malformed index comparison: unsupported right-hand side '{token}'."
        ));
    }

    Err("Filter must include an index check, e.g. index == '<value>'.".to_string())
}

/// Human-readable JSON type label for presence-stage messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Runs the full pipeline, returning collected warnings on success or the
/// first failing stage's message.
fn run_pipeline(filter: Option<&Value>, config: &Config) -> Result<Vec<String>, String> {
    let key = &config.fields.filter;

    // Stage 1: presence.
    let raw = match filter {
        None => return Err(format!("The '{key}' key is missing from the route record.")),
        Some(Value::String(s)) => s,
        Some(other) => {
            return Err(format!(
                "The '{key}' value must be a string, found {}.",
                json_type_name(other)
            ))
        }
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Filter expression is empty or whitespace only.".to_string());
    }

    length_bound(trimmed, config.filter.max_length)?;
    forbidden_characters(trimmed, &config.filter.forbidden)?;
    balanced_quotes(trimmed)?;
    balanced_parentheses(trimmed)?;
    operator_sanity(trimmed)?;

    // Stage 7: the structural matches below run on a whitespace-normalized
    // copy; the stages above must see the original so CR/LF and literal
    // spacing still count.
    let normalized = RE_WHITESPACE.replace_all(trimmed, " ");

    let mut warnings = Vec::new();
    index_clause(&normalized, &mut warnings)?;

    // Stage 9: mandatory secondary clause, gated by policy.
    if config.policy.require_input_id && !RE_INPUT_ID.is_match(&normalized) {
        return Err(
            "Filter must include a mandatory '__inputId' clause, e.g. __inputId == '<value>'."
                .to_string(),
        );
    }

    Ok(warnings)
}

// ---------------------------------------------------------------------------
// Checker
// ---------------------------------------------------------------------------

/// Built-in checker for filter expression syntax and mandatory clauses.
///
/// See the [module-level documentation](self) for the stage table and
/// ordering constraints.
pub struct FilterChecker;

impl Checker for FilterChecker {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn check_name(&self) -> &'static str {
        CHECK_NAME
    }

    fn description(&self) -> &'static str {
        "Filter expression syntax and mandatory-clause validation"
    }

    fn check(&self, route: &RouteRecord, config: &Config) -> CheckResult {
        match run_pipeline(route.filter.as_ref(), config) {
            Ok(warnings) if warnings.is_empty() => CheckResult::pass(CHECK_NAME, PASS_REMARK),
            Ok(warnings) => CheckResult::pass_with_warnings(CHECK_NAME, warnings),
            Err(message) => CheckResult::failed(CHECK_NAME, vec![message]),
        }
    }
}

// ---------------------------------------------------------------------------
// Rule catalogue
// ---------------------------------------------------------------------------

/// Returns the [`RuleInfo`] catalogue for every filter validation rule.
///
/// Used by the `list-checks` and `explain` CLI commands to display rule
/// metadata without running a validation.
pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: "filter/missing-key",
            severity: "error",
            checker: "filter",
            message: "Route record has no filter field",
            remediation: "Add a filter expression to the route record",
        },
        RuleInfo {
            id: "filter/not-a-string",
            severity: "error",
            checker: "filter",
            message: "Filter value must be a string",
            remediation: "Replace the filter value with a string expression",
        },
        RuleInfo {
            id: "filter/empty",
            severity: "error",
            checker: "filter",
            message: "Filter expression is empty or whitespace only",
            remediation: "Provide a non-empty filter expression",
        },
        RuleInfo {
            id: "filter/length-exceeded",
            severity: "error",
            checker: "filter",
            message: "Filter expression exceeds the maximum length (default 2000 characters)",
            remediation: "Shorten the filter expression or raise filter.max_length in the config",
        },
        RuleInfo {
            id: "filter/forbidden-characters",
            severity: "error",
            checker: "filter",
            message: "Filter contains forbidden characters (NUL, CR, LF, backtick, semicolon)",
            remediation: "Remove the forbidden characters from the filter expression",
        },
        RuleInfo {
            id: "filter/unbalanced-quotes",
            severity: "error",
            checker: "filter",
            message: "Single or double quotes do not pair up (escaped quotes are skipped)",
            remediation: "Close every quoted literal in the filter expression",
        },
        RuleInfo {
            id: "filter/unbalanced-parentheses",
            severity: "error",
            checker: "filter",
            message: "Count of '(' does not equal count of ')'",
            remediation: "Close every parenthesis in the filter expression",
        },
        RuleInfo {
            id: "filter/unsupported-in-operator",
            severity: "error",
            checker: "filter",
            message: "The 'in' membership operator is not supported",
            remediation: "Use index.includes('<value>') for membership tests",
        },
        RuleInfo {
            id: "filter/single-equals",
            severity: "error",
            checker: "filter",
            message: "Single '=' used where '==' is required",
            remediation: "Use '==' for equality comparison",
        },
        RuleInfo {
            id: "filter/lone-ampersand",
            severity: "error",
            checker: "filter",
            message: "Single '&' is not a valid operator",
            remediation: "Use '&&' for logical AND",
        },
        RuleInfo {
            id: "filter/lone-pipe",
            severity: "error",
            checker: "filter",
            message: "Single '|' is not a valid operator",
            remediation: "Use '||' for logical OR",
        },
        RuleInfo {
            id: "filter/dangling-boolean",
            severity: "error",
            checker: "filter",
            message: "Filter ends with a trailing '&&' or '||'",
            remediation: "Complete or remove the trailing boolean operator",
        },
        RuleInfo {
            id: "filter/invalid-boolean-sequence",
            severity: "error",
            checker: "filter",
            message: "Adjacent '&&' and '||' operators",
            remediation: "Put an operand between the boolean operators",
        },
        RuleInfo {
            id: "filter/index-wildcard",
            severity: "error",
            checker: "filter",
            message: "Wildcard '*' in an index comparison value",
            remediation: "Compare against a literal index value without wildcards",
        },
        RuleInfo {
            id: "filter/index-malformed-rhs",
            severity: "error",
            checker: "filter",
            message: "Index comparison right-hand side is not a quoted or plain token",
            remediation: "Quote the index value: index == '<value>'",
        },
        RuleInfo {
            id: "filter/index-missing",
            severity: "error",
            checker: "filter",
            message: "Filter has no index comparison or index.includes(...) clause",
            remediation: "Add an index check, e.g. index == '<value>'",
        },
        RuleInfo {
            id: "filter/index-unquoted",
            severity: "warning",
            checker: "filter",
            message: "Index comparison value is unquoted",
            remediation: "Quote the index value: index == '<value>'",
        },
        RuleInfo {
            id: "filter/includes-unquoted",
            severity: "warning",
            checker: "filter",
            message: "index.includes(...) argument is unquoted",
            remediation: "Quote the argument: index.includes('<value>')",
        },
        RuleInfo {
            id: "filter/input-id-missing",
            severity: "error",
            checker: "filter",
            message: "Filter has no mandatory '__inputId' equality clause (latest policy)",
            remediation: "Add __inputId == '<value>', or run with --legacy for the earlier policy",
        },
    ]
}
