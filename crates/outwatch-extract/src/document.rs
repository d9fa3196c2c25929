//! Document assembly: parse once, run every section parser, merge.

use std::sync::LazyLock;

use outwatch_core::{ExtractionResult, SelectorConfig};
use regex::Regex;
use scraper::Html;

use crate::error::ExtractError;
use crate::sections::{
    parse_chart, parse_issue_feed, parse_outage_cities, parse_problems, parse_reports,
    parse_service_header, parse_service_status,
};
use crate::selectors::CompiledSelectors;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(?:/?[a-z]|!doctype)").expect("valid tag regex"));

/// Parse raw HTML into a document tree.
///
/// The HTML parser itself recovers from any malformed markup, so the only
/// rejection here is input that holds no markup at all. A well-formed page
/// with no known sections (a maintenance notice, an empty body) parses and
/// extracts to an empty result.
///
/// # Errors
///
/// Returns [`ExtractError::DocumentUnparsable`] when the input is empty,
/// contains no `<`, or contains no tag or doctype (only comments or stray
/// angle brackets).
pub fn parse_document(raw: &str) -> Result<Html, ExtractError> {
    if raw.trim().is_empty() {
        return Err(unparsable("document is empty"));
    }
    if !raw.contains('<') {
        return Err(unparsable("no markup found"));
    }
    if !TAG_RE.is_match(raw) {
        return Err(unparsable("no tags found"));
    }

    let document = Html::parse_document(raw);
    if !document.errors.is_empty() {
        tracing::debug!(
            parse_errors = document.errors.len(),
            "HTML parser recovered from markup errors"
        );
    }

    Ok(document)
}

fn unparsable(reason: &str) -> ExtractError {
    ExtractError::DocumentUnparsable {
        reason: reason.to_string(),
    }
}

/// Run every section parser once against `document` and merge the results.
///
/// Sections are independent: an absent or redesigned section comes back
/// empty while the others are still filled.
#[must_use]
pub fn extract(document: &Html, selectors: &CompiledSelectors) -> ExtractionResult {
    let result = ExtractionResult {
        chart: parse_chart(document, selectors),
        problems: parse_problems(document, selectors),
        outage_cities: parse_outage_cities(document, selectors),
        reports: parse_reports(document, selectors),
        issues: parse_issue_feed(document, selectors),
        header: parse_service_header(document, selectors),
        status: parse_service_status(document, selectors),
    };

    tracing::debug!(
        selectors_version = selectors.version(),
        chart = !result.chart.is_empty(),
        problems = result.problems.len(),
        outage_cities = result.outage_cities.len(),
        reports = result.reports.len(),
        issues = result.issues.len(),
        "extracted outage page"
    );

    result
}

/// A compiled selector contract bundled with the extraction entry points.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    selectors: CompiledSelectors,
}

impl Extractor {
    /// Build an extractor for a selector contract.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] if any selector or pattern fails to compile.
    pub fn new(config: &SelectorConfig) -> Result<Self, ExtractError> {
        Ok(Self {
            selectors: CompiledSelectors::compile(config)?,
        })
    }

    #[must_use]
    pub fn selectors(&self) -> &CompiledSelectors {
        &self.selectors
    }

    /// Extract from an already-parsed document.
    #[must_use]
    pub fn extract(&self, document: &Html) -> ExtractionResult {
        extract(document, &self.selectors)
    }

    /// Parse `raw` and extract from it.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::DocumentUnparsable`] if `raw` is not a document.
    pub fn extract_page(&self, raw: &str) -> Result<ExtractionResult, ExtractError> {
        let document = parse_document(raw)?;
        Ok(self.extract(&document))
    }
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
