//! Scoring and hand-off for extracted outage pages.
//!
//! Derives the pain index from an [`outwatch_core::ExtractionResult`] and
//! drives the surrounding collaborators (page source, chart analyzer,
//! dashboard generator). The collaborators themselves live outside this
//! workspace; only their contracts are defined here.

pub mod collaborators;
pub mod dashboard;
pub mod error;
pub mod pain;
pub mod pipeline;
pub mod scorer;
pub mod signals;
pub mod types;

pub use collaborators::{ChartAnalyzer, DashboardGenerator, PageSource};
pub use dashboard::{clean_dashboard_output, parse_dashboard};
pub use error::InsightError;
pub use pain::{compute, PainIndex};
pub use pipeline::{provider_source_url, run_provider_insight};
pub use scorer::lexicon_score;
pub use signals::PainInputs;
pub use types::{InsightRecord, ProviderInsight, NO_CHART_ANALYSIS};
