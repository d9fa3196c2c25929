//! Derivation of pain-index inputs from an extraction result.

use std::collections::HashSet;

use outwatch_core::{ExtractionResult, ProblemCategory};
use serde::{Deserialize, Serialize};

use crate::pain::{compute, PainIndex};
use crate::scorer::lexicon_score;

/// The five pain-index inputs, as derived from one page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PainInputs {
    pub negative_sentiment_pct: f64,
    pub internet_issue_pct: f64,
    pub blackout_pct: f64,
    pub active_outage_city_count: usize,
    pub total_city_count: usize,
}

impl PainInputs {
    /// Derive inputs from extracted page data.
    ///
    /// - Internet and blackout shares come from the first problem category
    ///   whose label names them; unknown or absent shares count as 0.
    /// - Negative sentiment is the share of issue texts with a negative
    ///   lexicon score. Entries without text are left out of the count.
    /// - Active cities are the distinct names in the live outage listing;
    ///   total cities add the report-table and issue-feed locations.
    #[must_use]
    pub fn from_extraction(result: &ExtractionResult) -> Self {
        let active: HashSet<String> = result
            .outage_cities
            .iter()
            .filter_map(|c| city_key(&c.city))
            .collect();

        let mut all = active.clone();
        all.extend(result.reports.iter().filter_map(|r| city_key(&r.city)));
        all.extend(
            result
                .issues
                .iter()
                .filter_map(|i| i.location.as_deref().and_then(city_key)),
        );

        Self {
            negative_sentiment_pct: negative_share(result),
            internet_issue_pct: category_percent(&result.problems, "internet"),
            blackout_pct: category_percent(&result.problems, "blackout"),
            active_outage_city_count: active.len(),
            total_city_count: all.len(),
        }
    }

    /// Replace the derived sentiment share with an external one (0–100).
    #[must_use]
    pub fn with_negative_sentiment(mut self, pct: f64) -> Self {
        self.negative_sentiment_pct = pct;
        self
    }

    #[must_use]
    pub fn pain_index(&self) -> PainIndex {
        compute(
            self.negative_sentiment_pct,
            self.internet_issue_pct,
            self.blackout_pct,
            self.active_outage_city_count,
            self.total_city_count,
        )
    }
}

fn category_percent(problems: &[ProblemCategory], needle: &str) -> f64 {
    problems
        .iter()
        .find(|p| p.label.to_lowercase().contains(needle))
        .and_then(|p| p.percent)
        .map_or(0.0, f64::from)
}

fn negative_share(result: &ExtractionResult) -> f64 {
    let scores: Vec<f32> = result
        .issues
        .iter()
        .filter_map(|i| i.text.as_deref())
        .filter(|t| !t.trim().is_empty())
        .map(lexicon_score)
        .collect();

    if scores.is_empty() {
        return 0.0;
    }

    let negative = scores.iter().filter(|s| **s < 0.0).count();
    #[allow(clippy::cast_precision_loss)]
    let share = negative as f64 / scores.len() as f64;
    share * 100.0
}

/// Comparison key for a place name: the part before the first comma,
/// trimmed and lowercased. `"Dallas, Texas"` and `"dallas"` collide.
fn city_key(name: &str) -> Option<String> {
    let head = name.split(',').next().unwrap_or_default().trim();
    if head.is_empty() {
        None
    } else {
        Some(head.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use outwatch_core::{CityRef, IssueEntry, OutageReport};

    use super::*;

    fn city(name: &str) -> CityRef {
        CityRef {
            city: name.to_string(),
            link: None,
        }
    }

    fn report(city: &str) -> OutageReport {
        OutageReport {
            city: city.to_string(),
            reason: "Internet".to_string(),
            time_human: "now".to_string(),
            time_iso: None,
        }
    }

    fn issue(text: Option<&str>, location: Option<&str>) -> IssueEntry {
        IssueEntry {
            user: None,
            text: text.map(str::to_string),
            time_iso: None,
            location: location.map(str::to_string),
        }
    }

    fn category(label: &str, percent: Option<u8>) -> ProblemCategory {
        ProblemCategory {
            label: label.to_string(),
            percent,
        }
    }

    #[test]
    fn empty_result_gives_zero_inputs() {
        let inputs = PainInputs::from_extraction(&ExtractionResult::default());
        assert_eq!(inputs.negative_sentiment_pct, 0.0);
        assert_eq!(inputs.internet_issue_pct, 0.0);
        assert_eq!(inputs.blackout_pct, 0.0);
        assert_eq!(inputs.active_outage_city_count, 0);
        assert_eq!(inputs.total_city_count, 0);
        assert_eq!(inputs.pain_index().value(), 0.0);
    }

    #[test]
    fn category_shares_match_labels_case_insensitively() {
        let result = ExtractionResult {
            problems: vec![
                category("Mobile Phone", Some(20)),
                category("Internet", Some(46)),
                category("Total Blackout", Some(31)),
            ],
            ..ExtractionResult::default()
        };
        let inputs = PainInputs::from_extraction(&result);
        assert_eq!(inputs.internet_issue_pct, 46.0);
        assert_eq!(inputs.blackout_pct, 31.0);
    }

    #[test]
    fn unknown_category_share_counts_as_zero() {
        let result = ExtractionResult {
            problems: vec![category("Internet", None)],
            ..ExtractionResult::default()
        };
        assert_eq!(PainInputs::from_extraction(&result).internet_issue_pct, 0.0);
    }

    #[test]
    fn negative_share_ignores_entries_without_text() {
        let result = ExtractionResult {
            issues: vec![
                issue(Some("internet down again"), None),
                issue(Some("restored, working now"), None),
                issue(None, Some("Reno, Nevada")),
                issue(Some("   "), None),
            ],
            ..ExtractionResult::default()
        };
        let inputs = PainInputs::from_extraction(&result);
        assert!((inputs.negative_sentiment_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn city_counts_deduplicate_across_sections() {
        let result = ExtractionResult {
            outage_cities: vec![city("Dallas"), city("Houston"), city("Dallas")],
            reports: vec![report("Dallas"), report("Chicago"), report("Miami")],
            issues: vec![issue(None, Some("Chicago, Illinois")), issue(None, Some("Reno"))],
            ..ExtractionResult::default()
        };
        let inputs = PainInputs::from_extraction(&result);
        assert_eq!(inputs.active_outage_city_count, 2);
        assert_eq!(inputs.total_city_count, 5);
    }

    #[test]
    fn sentiment_override_changes_index() {
        let result = ExtractionResult {
            problems: vec![category("Internet", Some(50)), category("Blackout", Some(10))],
            outage_cities: vec![city("A"), city("B"), city("C")],
            reports: (0..7).map(|i| report(&format!("City {i}"))).collect(),
            ..ExtractionResult::default()
        };
        let inputs = PainInputs::from_extraction(&result).with_negative_sentiment(60.0);
        assert_eq!(inputs.total_city_count, 10);
        assert!((inputs.pain_index().value() - 4.4).abs() < 1e-9);
    }
}
