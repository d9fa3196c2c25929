//! Provider insight orchestration.

use chrono::Utc;
use outwatch_extract::Extractor;

use crate::collaborators::{ChartAnalyzer, DashboardGenerator, PageSource};
use crate::dashboard::parse_dashboard;
use crate::error::InsightError;
use crate::signals::PainInputs;
use crate::types::{InsightRecord, ProviderInsight, NO_CHART_ANALYSIS};

/// Status page URL for a provider: `<base>/<provider lower-cased>`.
#[must_use]
pub fn provider_source_url(base: &str, provider: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        provider.trim().to_lowercase()
    )
}

/// Run the full insight pipeline for one provider.
///
/// 1. Fetch the status page through `source`.
/// 2. Extract every section with `extractor`.
/// 3. Analyze the chart image, if the page has one.
/// 4. Derive pain inputs and the pain index.
/// 5. Hand the record to `generator` and parse its dashboard JSON.
///
/// A missing chart image or a failed chart analysis does not stop the run;
/// the record carries [`NO_CHART_ANALYSIS`] instead.
///
/// # Errors
///
/// Returns [`InsightError`] if the fetch, extraction or generation fails,
/// or if the generator output is not JSON.
pub async fn run_provider_insight<S, A, G>(
    source: &S,
    analyzer: &A,
    generator: &G,
    extractor: &Extractor,
    provider: &str,
    source_base_url: &str,
) -> Result<ProviderInsight, InsightError>
where
    S: PageSource + Sync,
    A: ChartAnalyzer + Sync,
    G: DashboardGenerator + Sync,
{
    let html = source.fetch_page(provider).await?;
    let extraction = extractor.extract_page(&html)?;

    let chart_analysis = match extraction.chart.image_url.as_deref() {
        Some(url) => match analyzer.analyze_chart(url).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(provider, error = %e, "chart analysis failed, using fallback");
                NO_CHART_ANALYSIS.to_string()
            }
        },
        None => {
            tracing::debug!(provider, "page has no chart image");
            NO_CHART_ANALYSIS.to_string()
        }
    };

    let pain_inputs = PainInputs::from_extraction(&extraction);
    let pain_index = pain_inputs.pain_index();
    tracing::info!(provider, pain_index = %pain_index, "computed pain index");

    let record = InsightRecord {
        provider: provider.to_string(),
        source_url: provider_source_url(source_base_url, provider),
        generated_at: Utc::now(),
        extraction,
        chart_analysis,
        pain_inputs,
        pain_index,
    };

    let raw = generator.generate(&record).await?;
    let dashboard = parse_dashboard(&raw)?;

    Ok(ProviderInsight { record, dashboard })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
