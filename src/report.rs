use std::fmt;

/// Verdict of a single check run against one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CheckStatus {
    Pass,
    Failed,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "Pass"),
            CheckStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// The outcome of one checker for one route.
///
/// Invariant: `status` is [`CheckStatus::Failed`] iff at least one rule
/// violation was detected, and `remarks` is never empty. On a clean pass the
/// remarks hold a single confirmation message; on a pass with warnings they
/// hold the warning text; on a failure they hold the violation message(s).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CheckResult {
    pub check_name: String,
    pub status: CheckStatus,
    pub remarks: Vec<String>,
}

impl CheckResult {
    /// A clean pass carrying a single confirmation remark.
    pub fn pass(check_name: &str, remark: &str) -> Self {
        CheckResult {
            check_name: check_name.to_string(),
            status: CheckStatus::Pass,
            remarks: vec![remark.to_string()],
        }
    }

    /// A pass whose remarks are the warnings collected along the way.
    pub fn pass_with_warnings(check_name: &str, warnings: Vec<String>) -> Self {
        debug_assert!(!warnings.is_empty());
        CheckResult {
            check_name: check_name.to_string(),
            status: CheckStatus::Pass,
            remarks: warnings,
        }
    }

    /// A failure carrying one or more violation messages.
    pub fn failed(check_name: &str, remarks: Vec<String>) -> Self {
        debug_assert!(!remarks.is_empty());
        CheckResult {
            check_name: check_name.to_string(),
            status: CheckStatus::Failed,
            remarks,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Pass
    }

    /// Remarks collapsed to one line for table and terminal rendering.
    pub fn remarks_line(&self) -> String {
        self.remarks.join(" ; ")
    }
}

/// All check results for one route record.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RouteReport {
    pub route_name: Option<String>,
    pub destination: Option<String>,
    pub results: Vec<CheckResult>,
    pub passed: bool,
}

impl RouteReport {
    pub fn from_results(
        route_name: Option<String>,
        destination: Option<String>,
        results: Vec<CheckResult>,
    ) -> Self {
        let passed = results.iter().all(CheckResult::passed);
        RouteReport {
            route_name,
            destination,
            results,
            passed,
        }
    }

    /// Route name for display; placeholder when the record carried none.
    pub fn display_name(&self) -> &str {
        self.route_name.as_deref().unwrap_or("<unnamed>")
    }
}

/// The aggregated outcome of validating a whole batch of routes.
///
/// Sequence numbers for the flat `No | Check Name | Status | Remarks` report
/// rows are assigned by the output layer, not here.
#[derive(Debug, serde::Serialize)]
pub struct BatchReport {
    /// Where the batch came from (typically the input file path).
    pub source: String,
    pub timestamp: String,
    pub routes: Vec<RouteReport>,
    pub passed: bool,
}

impl BatchReport {
    pub fn from_routes(source: &str, routes: Vec<RouteReport>) -> Self {
        let passed = routes.iter().all(|r| r.passed);
        BatchReport {
            source: source.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            routes,
            passed,
        }
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn check_count(&self) -> usize {
        self.routes.iter().map(|r| r.results.len()).sum()
    }

    /// Count passed and failed checks across all routes in a single pass.
    ///
    /// Returns `(passed, failed)`. Prefer this over filtering twice when both
    /// values are needed at the same time (e.g. the summary line).
    pub fn count_by_status(&self) -> (usize, usize) {
        self.routes
            .iter()
            .flat_map(|r| &r.results)
            .fold((0, 0), |(p, f), result| match result.status {
                CheckStatus::Pass => (p + 1, f),
                CheckStatus::Failed => (p, f + 1),
            })
    }

    pub fn failed_route_count(&self) -> usize {
        self.routes.iter().filter(|r| !r.passed).count()
    }
}
