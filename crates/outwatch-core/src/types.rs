use serde::{Deserialize, Serialize};

/// Trend chart metadata scraped from the page.
///
/// Every field is independent: the inline script timestamp, the chart image
/// and the date mined from its alt text can each be missing on their own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartInfo {
    /// Raw digits assigned to the chart timestamp variable in inline script.
    pub chart_timestamp: Option<String>,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    /// `MM/DD/YYYY HH:MM` substring found in the image alt text.
    pub alt_time: Option<String>,
}

impl ChartInfo {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chart_timestamp.is_none()
            && self.image_url.is_none()
            && self.image_alt.is_none()
            && self.alt_time.is_none()
    }
}

/// One entry of the "most reported problems" breakdown.
///
/// `percent` is `None` when the page gave no readable percentage. That is
/// distinct from `Some(0)`. Percentages across categories are not
/// normalized and need not sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemCategory {
    pub label: String,
    pub percent: Option<u8>,
}

/// A city named in the live outage listing, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRef {
    pub city: String,
    pub link: Option<String>,
}

/// One row of the latest-reports table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutageReport {
    pub city: String,
    pub reason: String,
    pub time_human: String,
    /// Normalized `datetime` attribute. `None` when the row carried none.
    /// May hold a pass-through string that is not a timestamp.
    pub time_iso: Option<String>,
}

/// One community report from the issue feed. Partial entries are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueEntry {
    pub user: Option<String>,
    pub text: Option<String>,
    pub time_iso: Option<String>,
    pub location: Option<String>,
}

/// Provider heading block at the top of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHeader {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub logo_url: Option<String>,
}

/// The status alert box ("no problems", "some problems", "major outage").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Space-joined class list of the alert box.
    pub status_class: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Normal,
    SomeProblems,
    MajorProblems,
    Unknown,
}

impl std::fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusLevel::Normal => write!(f, "normal"),
            StatusLevel::SomeProblems => write!(f, "some_problems"),
            StatusLevel::MajorProblems => write!(f, "major_problems"),
            StatusLevel::Unknown => write!(f, "unknown"),
        }
    }
}

impl ServiceStatus {
    /// Classifies the alert box from its class list.
    ///
    /// Class names look like `status-major`, `status-some`, `status-normal`.
    /// The most severe marker wins when several are present.
    #[must_use]
    pub fn level(&self) -> StatusLevel {
        let Some(classes) = self.status_class.as_deref() else {
            return StatusLevel::Unknown;
        };
        let has = |marker: &str| {
            classes
                .split_whitespace()
                .any(|class| class.eq_ignore_ascii_case(marker))
        };
        if has("status-major") {
            StatusLevel::MajorProblems
        } else if has("status-some") {
            StatusLevel::SomeProblems
        } else if has("status-normal") {
            StatusLevel::Normal
        } else {
            StatusLevel::Unknown
        }
    }
}

/// Everything extracted from one page.
///
/// Each section is filled independently; an empty section means the markup
/// was absent, never that extraction of another section failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default)]
    pub chart: ChartInfo,
    #[serde(default)]
    pub problems: Vec<ProblemCategory>,
    #[serde(default)]
    pub outage_cities: Vec<CityRef>,
    #[serde(default)]
    pub reports: Vec<OutageReport>,
    #[serde(default)]
    pub issues: Vec<IssueEntry>,
    #[serde(default)]
    pub header: ServiceHeader,
    #[serde(default)]
    pub status: ServiceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(class: Option<&str>) -> ServiceStatus {
        ServiceStatus {
            status_class: class.map(str::to_string),
            title: None,
            summary: None,
        }
    }

    #[test]
    fn level_major_outranks_some() {
        let s = status(Some("service-status-alert-box status-some status-major"));
        assert_eq!(s.level(), StatusLevel::MajorProblems);
    }

    #[test]
    fn level_normal() {
        let s = status(Some("service-status-alert-box status-normal"));
        assert_eq!(s.level(), StatusLevel::Normal);
    }

    #[test]
    fn level_matches_whole_class_tokens_only() {
        let s = status(Some("service-status-alert-box awesome-banner majority-vote"));
        assert_eq!(s.level(), StatusLevel::Unknown);
        let s = status(Some("status-somewhere status-normal"));
        assert_eq!(s.level(), StatusLevel::Normal);
    }

    #[test]
    fn level_unknown_without_box() {
        assert_eq!(status(None).level(), StatusLevel::Unknown);
    }

    #[test]
    fn missing_sections_deserialize_as_empty() {
        let result: ExtractionResult = serde_json::from_str("{}").unwrap();
        assert!(result.problems.is_empty());
        assert!(result.outage_cities.is_empty());
        assert!(result.reports.is_empty());
        assert!(result.issues.is_empty());
        assert!(result.chart.is_empty());
    }

    #[test]
    fn unknown_percent_serializes_as_null() {
        let category = ProblemCategory {
            label: "TV".to_string(),
            percent: None,
        };
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["percent"], serde_json::Value::Null);
    }
}
