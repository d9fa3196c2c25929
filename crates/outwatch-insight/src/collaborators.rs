//! Contracts for the services surrounding the extraction core.
//!
//! Fetching pages, analyzing chart images and generating dashboards all
//! happen outside this workspace. Implementations report failures through
//! [`InsightError`]'s `Fetch`, `ChartAnalysis` and `Generator` variants.

use std::future::Future;

use crate::error::InsightError;
use crate::types::InsightRecord;

/// Returns the raw HTML of a provider's status page.
pub trait PageSource {
    fn fetch_page(&self, provider: &str)
        -> impl Future<Output = Result<String, InsightError>> + Send;
}

/// Turns a chart image URL into a free-text trend analysis.
pub trait ChartAnalyzer {
    fn analyze_chart(
        &self,
        image_url: &str,
    ) -> impl Future<Output = Result<String, InsightError>> + Send;
}

/// Turns an insight record into dashboard JSON text (possibly fenced).
pub trait DashboardGenerator {
    fn generate(
        &self,
        record: &InsightRecord,
    ) -> impl Future<Output = Result<String, InsightError>> + Send;
}
