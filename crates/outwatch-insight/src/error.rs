use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("extraction failed: {0}")]
    Extract(#[from] outwatch_extract::ExtractError),

    #[error("page fetch failed for {provider}: {reason}")]
    Fetch { provider: String, reason: String },

    #[error("chart analysis failed: {0}")]
    ChartAnalysis(String),

    #[error("dashboard generation failed: {0}")]
    Generator(String),

    #[error("dashboard output is not valid JSON: {source}")]
    InvalidDashboard {
        #[source]
        source: serde_json::Error,
    },
}
