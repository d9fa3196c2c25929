use chrono::{DateTime, Utc};
use outwatch_core::ExtractionResult;
use serde::{Deserialize, Serialize};

use crate::pain::PainIndex;
use crate::signals::PainInputs;

/// Chart analysis text used when no chart image exists or its analysis fails.
pub const NO_CHART_ANALYSIS: &str = "No chart data available for the last 24 hours.";

/// Structured record handed to the dashboard generator and to persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightRecord {
    pub provider: String,
    pub source_url: String,
    pub generated_at: DateTime<Utc>,
    pub extraction: ExtractionResult,
    /// Opaque text from the chart analyzer, or [`NO_CHART_ANALYSIS`].
    pub chart_analysis: String,
    pub pain_inputs: PainInputs,
    pub pain_index: PainIndex,
}

/// Pipeline output: the record plus the generator's dashboard JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderInsight {
    pub record: InsightRecord,
    pub dashboard: serde_json::Value,
}
