//! Compiled form of [`SelectorConfig`].
//!
//! Compilation happens once per contract; a bad selector or pattern is a
//! configuration error surfaced here, never during extraction.

use outwatch_core::SelectorConfig;
use regex::Regex;
use scraper::Selector;

use crate::error::ExtractError;

#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    version: u32,
    pub(crate) chart: ChartQueries,
    pub(crate) problems: ProblemQueries,
    pub(crate) outage_cities: OutageCityQueries,
    pub(crate) reports: ReportQueries,
    pub(crate) issues: IssueQueries,
    pub(crate) status: StatusQueries,
    pub(crate) header: HeaderQueries,
}

#[derive(Debug, Clone)]
pub(crate) struct ChartQueries {
    pub(crate) script: Selector,
    pub(crate) timestamp: Regex,
    pub(crate) image: Selector,
    pub(crate) alt_time: Regex,
}

#[derive(Debug, Clone)]
pub(crate) struct ProblemQueries {
    pub(crate) item: Selector,
    pub(crate) label: Selector,
    pub(crate) percent_text: Selector,
    pub(crate) percent_image: Selector,
}

#[derive(Debug, Clone)]
pub(crate) struct OutageCityQueries {
    pub(crate) heading: Selector,
    pub(crate) marker: String,
    pub(crate) paragraph: Selector,
    pub(crate) link: Selector,
}

#[derive(Debug, Clone)]
pub(crate) struct ReportQueries {
    pub(crate) row: Selector,
    pub(crate) cell: Selector,
    pub(crate) time: Selector,
    pub(crate) time_attribute: String,
}

#[derive(Debug, Clone)]
pub(crate) struct IssueQueries {
    pub(crate) item: Selector,
    pub(crate) user: Selector,
    pub(crate) text: Selector,
    pub(crate) time: Selector,
    pub(crate) time_attribute: String,
    pub(crate) location: Selector,
}

#[derive(Debug, Clone)]
pub(crate) struct StatusQueries {
    pub(crate) alert_box: Selector,
    pub(crate) title: Selector,
    pub(crate) summary: Selector,
}

#[derive(Debug, Clone)]
pub(crate) struct HeaderQueries {
    pub(crate) title: Selector,
    pub(crate) subtitle: Selector,
    pub(crate) logo: Selector,
}

impl CompiledSelectors {
    /// Compile every selector and pattern in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidSelector`] or
    /// [`ExtractError::InvalidPattern`] naming the offending field.
    pub fn compile(config: &SelectorConfig) -> Result<Self, ExtractError> {
        let chart = &config.chart;
        let problems = &config.problems;
        let cities = &config.outage_cities;
        let reports = &config.reports;
        let issues = &config.issues;
        let status = &config.status;
        let header = &config.header;

        let timestamp_pattern = format!(
            r"\b{}\s*=\s*(\d+)",
            regex::escape(chart.timestamp_variable.trim())
        );

        Ok(Self {
            version: config.version,
            chart: ChartQueries {
                script: css("chart.script", &chart.script)?,
                timestamp: pattern("chart.timestamp_variable", &timestamp_pattern)?,
                image: css("chart.image", &chart.image)?,
                alt_time: pattern("chart.alt_time_pattern", &chart.alt_time_pattern)?,
            },
            problems: ProblemQueries {
                item: css("problems.item", &problems.item)?,
                label: css("problems.label", &problems.label)?,
                percent_text: css("problems.percent_text", &problems.percent_text)?,
                percent_image: css("problems.percent_image", &problems.percent_image)?,
            },
            outage_cities: OutageCityQueries {
                heading: css("outage_cities.heading", &cities.heading)?,
                marker: cities.marker.clone(),
                paragraph: css("outage_cities.paragraph", &cities.paragraph)?,
                link: css("outage_cities.link", &cities.link)?,
            },
            reports: ReportQueries {
                row: css("reports.row", &reports.row)?,
                cell: css("reports.cell", &reports.cell)?,
                time: css("reports.time", &reports.time)?,
                time_attribute: reports.time_attribute.clone(),
            },
            issues: IssueQueries {
                item: css("issues.item", &issues.item)?,
                user: css("issues.user", &issues.user)?,
                text: css("issues.text", &issues.text)?,
                time: css("issues.time", &issues.time)?,
                time_attribute: issues.time_attribute.clone(),
                location: css("issues.location", &issues.location)?,
            },
            status: StatusQueries {
                alert_box: css("status.alert_box", &status.alert_box)?,
                title: css("status.title", &status.title)?,
                summary: css("status.summary", &status.summary)?,
            },
            header: HeaderQueries {
                title: css("header.title", &header.title)?,
                subtitle: css("header.subtitle", &header.subtitle)?,
                logo: css("header.logo", &header.logo)?,
            },
        })
    }

    /// Version of the contract these selectors were compiled from.
    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }
}

impl Default for CompiledSelectors {
    /// The built-in contract for the current page markup.
    fn default() -> Self {
        Self::compile(&SelectorConfig::default()).expect("built-in selector contract compiles")
    }
}

fn css(field: &str, selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        field: field.to_string(),
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

fn pattern(field: &str, source: &str) -> Result<Regex, ExtractError> {
    Regex::new(source).map_err(|e| ExtractError::InvalidPattern {
        field: field.to_string(),
        pattern: source.to_string(),
        source: e,
    })
}
