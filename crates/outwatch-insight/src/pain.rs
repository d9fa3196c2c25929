//! Composite pain index.
//!
//! ```text
//! raw = 0.4 * negative_sentiment_pct
//!     + 0.3 * internet_issue_pct
//!     + 0.2 * blackout_pct
//!     + 0.1 * (active_outage_city_count / total_city_count * 100)
//! pain_index = clamp(raw / 10, 0, 10)
//! ```
//!
//! Percentages are on a 0–100 scale, so `raw` sits in roughly 0–100 for
//! well-formed input. The geographic term is 0 when `total_city_count` is 0.

use serde::{Deserialize, Serialize};

const SENTIMENT_WEIGHT: f64 = 0.4;
const INTERNET_WEIGHT: f64 = 0.3;
const BLACKOUT_WEIGHT: f64 = 0.2;
const GEOGRAPHY_WEIGHT: f64 = 0.1;

/// Divisor taking the 0–100 weighted sum onto the 0–10 scale.
const SCALE_DIVISOR: f64 = 10.0;

/// A single 0–10 service-health score. Higher is worse.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PainIndex(f64);

impl PainIndex {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 10.0;

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for PainIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Compute the pain index from percentages (0–100) and city counts.
///
/// Always returns a value in `[0, 10]`. A non-finite weighted sum (NaN
/// inputs) scores 0.
#[must_use]
pub fn compute(
    negative_sentiment_pct: f64,
    internet_issue_pct: f64,
    blackout_pct: f64,
    active_outage_city_count: usize,
    total_city_count: usize,
) -> PainIndex {
    let raw = SENTIMENT_WEIGHT * negative_sentiment_pct
        + INTERNET_WEIGHT * internet_issue_pct
        + BLACKOUT_WEIGHT * blackout_pct
        + GEOGRAPHY_WEIGHT * geographic_pct(active_outage_city_count, total_city_count);

    let scaled = raw / SCALE_DIVISOR;
    if scaled.is_nan() {
        return PainIndex(PainIndex::MIN);
    }
    PainIndex(scaled.clamp(PainIndex::MIN, PainIndex::MAX))
}

/// Share of cities with an active outage, as a percentage.
fn geographic_pct(active: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let share = active as f64 / total as f64;
    share * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: PainIndex, expected: f64) {
        assert!(
            (actual.value() - expected).abs() < 1e-9,
            "expected {expected}, got {}",
            actual.value()
        );
    }

    #[test]
    fn worked_example() {
        // 0.4*60 + 0.3*50 + 0.2*10 + 0.1*30 = 44 → 4.4
        assert_close(compute(60.0, 50.0, 10.0, 3, 10), 4.4);
    }

    #[test]
    fn zero_total_cities_drops_geographic_term() {
        assert_close(compute(60.0, 50.0, 10.0, 3, 0), 4.1);
    }

    #[test]
    fn all_zero_is_zero() {
        assert_close(compute(0.0, 0.0, 0.0, 0, 0), 0.0);
    }

    #[test]
    fn saturated_inputs_reach_ten() {
        assert_close(compute(100.0, 100.0, 100.0, 5, 5), 10.0);
    }

    #[test]
    fn oversized_inputs_clamp_to_ten() {
        assert_close(compute(500.0, 300.0, 200.0, 50, 5), 10.0);
        assert_close(compute(f64::INFINITY, 0.0, 0.0, 0, 0), 10.0);
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        assert_close(compute(-80.0, 0.0, 0.0, 0, 1), 0.0);
    }

    #[test]
    fn nan_scores_zero() {
        assert_close(compute(f64::NAN, 10.0, 10.0, 1, 2), 0.0);
    }

    #[test]
    fn always_within_bounds_for_non_negative_inputs() {
        let pcts = [0.0, 0.5, 12.5, 33.3, 50.0, 99.9, 100.0, 150.0];
        let counts = [0usize, 1, 3, 10, 1000];
        for &neg in &pcts {
            for &net in &pcts {
                for &black in &pcts {
                    for &active in &counts {
                        for &total in &counts {
                            let v = compute(neg, net, black, active, total).value();
                            assert!(
                                (PainIndex::MIN..=PainIndex::MAX).contains(&v),
                                "out of range: {v} for ({neg}, {net}, {black}, {active}, {total})"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&compute(60.0, 50.0, 10.0, 3, 10)).unwrap();
        assert!(json.starts_with("4.4"), "unexpected json: {json}");
    }

    #[test]
    fn display_rounds_to_one_decimal() {
        assert_eq!(compute(60.0, 50.0, 10.0, 3, 10).to_string(), "4.4");
    }
}
