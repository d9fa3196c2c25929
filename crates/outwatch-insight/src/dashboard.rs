//! Cleanup of generator output.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::InsightError;

static FENCE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*```(?:json)?[ \t]*\n?").expect("valid fence regex"));
static FENCE_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n?[ \t]*```\s*$").expect("valid fence regex"));

/// Strip a surrounding markdown code fence and whitespace.
#[must_use]
pub fn clean_dashboard_output(raw: &str) -> String {
    let without_open = FENCE_OPEN_RE.replace(raw, "");
    let without_close = FENCE_CLOSE_RE.replace(&without_open, "");
    without_close.trim().to_string()
}

/// Clean and parse generator output as JSON.
///
/// # Errors
///
/// Returns [`InsightError::InvalidDashboard`] if the cleaned text is not JSON.
pub fn parse_dashboard(raw: &str) -> Result<serde_json::Value, InsightError> {
    let cleaned = clean_dashboard_output(raw);
    serde_json::from_str(&cleaned).map_err(|source| InsightError::InvalidDashboard { source })
}
