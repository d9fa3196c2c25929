//! Versioned selector contract for the outage status page.
//!
//! The page markup is owned by a third party and drifts. Every CSS selector
//! and text pattern the section parsers rely on lives here, so a markup
//! change ships as a new YAML file instead of a code change. Selectors are
//! kept as strings; compilation happens in the extraction crate.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Version of the built-in contract returned by [`SelectorConfig::default`].
pub const DEFAULT_SELECTORS_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub version: u32,
    #[serde(default)]
    pub chart: ChartSelectors,
    #[serde(default)]
    pub problems: ProblemSelectors,
    #[serde(default)]
    pub outage_cities: OutageCitySelectors,
    #[serde(default)]
    pub reports: ReportSelectors,
    #[serde(default)]
    pub issues: IssueSelectors,
    #[serde(default)]
    pub status: StatusSelectors,
    #[serde(default)]
    pub header: HeaderSelectors,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_SELECTORS_VERSION,
            chart: ChartSelectors::default(),
            problems: ProblemSelectors::default(),
            outage_cities: OutageCitySelectors::default(),
            reports: ReportSelectors::default(),
            issues: IssueSelectors::default(),
            status: StatusSelectors::default(),
            header: HeaderSelectors::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSelectors {
    /// Elements whose text is scanned for the timestamp assignment.
    pub script: String,
    /// Script variable holding the chart's epoch timestamp.
    pub timestamp_variable: String,
    pub image: String,
    /// Regex with one capture group, applied to the image alt text.
    pub alt_time_pattern: String,
}

impl Default for ChartSelectors {
    fn default() -> Self {
        Self {
            script: "script".to_string(),
            timestamp_variable: "chartTs".to_string(),
            image: "#chart-container #chart-img".to_string(),
            alt_time_pattern: r"(\d{2}/\d{2}/\d{4}\s+\d{2}:\d{2})".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemSelectors {
    pub item: String,
    pub label: String,
    /// Preferred percent source, relative to the item.
    pub percent_text: String,
    /// Fallback percent source; its `alt` attribute is read.
    pub percent_image: String,
}

impl Default for ProblemSelectors {
    fn default() -> Self {
        Self {
            item: "ol.doughtnut-list > li".to_string(),
            label: "p".to_string(),
            percent_text: "p span".to_string(),
            percent_image: "img".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutageCitySelectors {
    pub heading: String,
    /// Phrase the heading text must contain.
    pub marker: String,
    /// First element after the heading matching this holds the city links.
    pub paragraph: String,
    pub link: String,
}

impl Default for OutageCitySelectors {
    fn default() -> Self {
        Self {
            heading: "h3".to_string(),
            marker: "Live Outage Map".to_string(),
            paragraph: "p".to_string(),
            link: "a".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSelectors {
    pub row: String,
    pub cell: String,
    pub time: String,
    pub time_attribute: String,
}

impl Default for ReportSelectors {
    fn default() -> Self {
        Self {
            row: "#latestreports tr".to_string(),
            cell: "td".to_string(),
            time: "time".to_string(),
            time_attribute: "datetime".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueSelectors {
    pub item: String,
    pub user: String,
    pub text: String,
    pub time: String,
    pub time_attribute: String,
    pub location: String,
}

impl Default for IssueSelectors {
    fn default() -> Self {
        Self {
            item: "ul.reports > li".to_string(),
            user: "span.pseudolink".to_string(),
            text: "p span".to_string(),
            time: "time".to_string(),
            time_attribute: "datetime".to_string(),
            location: "a.city-link".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusSelectors {
    pub alert_box: String,
    pub title: String,
    pub summary: String,
}

impl Default for StatusSelectors {
    fn default() -> Self {
        Self {
            alert_box: ".service-status-alert-box".to_string(),
            title: ".status-title-normal, .status-title-major, .status-title-some".to_string(),
            summary: ".status-summary".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderSelectors {
    pub title: String,
    pub subtitle: String,
    pub logo: String,
}

impl Default for HeaderSelectors {
    fn default() -> Self {
        Self {
            title: "main article header h1".to_string(),
            subtitle: "main article header h2".to_string(),
            logo: ".service-logo-container img".to_string(),
        }
    }
}

impl SelectorConfig {
    /// Every `(field, value)` pair in the contract, for validation and
    /// error reporting.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("chart.script", self.chart.script.as_str()),
            ("chart.timestamp_variable", self.chart.timestamp_variable.as_str()),
            ("chart.image", self.chart.image.as_str()),
            ("chart.alt_time_pattern", self.chart.alt_time_pattern.as_str()),
            ("problems.item", self.problems.item.as_str()),
            ("problems.label", self.problems.label.as_str()),
            ("problems.percent_text", self.problems.percent_text.as_str()),
            ("problems.percent_image", self.problems.percent_image.as_str()),
            ("outage_cities.heading", self.outage_cities.heading.as_str()),
            ("outage_cities.marker", self.outage_cities.marker.as_str()),
            ("outage_cities.paragraph", self.outage_cities.paragraph.as_str()),
            ("outage_cities.link", self.outage_cities.link.as_str()),
            ("reports.row", self.reports.row.as_str()),
            ("reports.cell", self.reports.cell.as_str()),
            ("reports.time", self.reports.time.as_str()),
            ("reports.time_attribute", self.reports.time_attribute.as_str()),
            ("issues.item", self.issues.item.as_str()),
            ("issues.user", self.issues.user.as_str()),
            ("issues.text", self.issues.text.as_str()),
            ("issues.time", self.issues.time.as_str()),
            ("issues.time_attribute", self.issues.time_attribute.as_str()),
            ("issues.location", self.issues.location.as_str()),
            ("status.alert_box", self.status.alert_box.as_str()),
            ("status.title", self.status.title.as_str()),
            ("status.summary", self.status.summary.as_str()),
            ("header.title", self.header.title.as_str()),
            ("header.subtitle", self.header.subtitle.as_str()),
            ("header.logo", self.header.logo.as_str()),
        ]
    }
}

/// Load and validate a selector contract from a YAML file.
///
/// Sections omitted from the file keep their built-in defaults.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_selectors(path: &Path) -> Result<SelectorConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SelectorsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_selectors(&content)
}

/// Parse and validate a selector contract from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_selectors(content: &str) -> Result<SelectorConfig, ConfigError> {
    let config: SelectorConfig = serde_yaml::from_str(content)?;
    validate_selectors(&config)?;
    Ok(config)
}

fn validate_selectors(config: &SelectorConfig) -> Result<(), ConfigError> {
    if config.version == 0 {
        return Err(ConfigError::Validation(
            "selector config version must be at least 1".to_string(),
        ));
    }

    for (field, value) in config.entries() {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "selector '{field}' must be non-empty"
            )));
        }
    }

    Ok(())
}
