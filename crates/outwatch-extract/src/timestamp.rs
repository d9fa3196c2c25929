//! Timestamp normalization for `datetime` attributes.
//!
//! The source page mostly emits ISO-8601 with a `Z` suffix, but sometimes
//! puts a human-readable fallback in the same attribute. Parseable values
//! are re-emitted in one canonical form; anything else passes through
//! untouched. Callers use [`is_canonical`] or [`as_datetime`] before
//! treating a normalized value as a timestamp.

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat};
use outwatch_core::OutageReport;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const NAIVE_OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Normalize a raw timestamp attribute.
///
/// - `None` or `""` → `None`
/// - ISO-8601 with offset or `Z` → RFC 3339 with a numeric offset
///   (`2024-03-01T14:05:00+00:00`)
/// - ISO-8601 without offset → `YYYY-MM-DDTHH:MM:SS[.fff]`
/// - anything else → returned unchanged
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`.
#[must_use]
pub fn normalize(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }
    Some(canonicalize(raw).unwrap_or_else(|| raw.to_string()))
}

/// True if `value` is already in canonical timestamp form.
#[must_use]
pub fn is_canonical(value: &str) -> bool {
    canonicalize(value).is_some_and(|c| c == value)
}

/// Parse a canonical timestamp. Offset-less values are read as UTC.
///
/// Returns `None` for pass-through strings that are not timestamps.
#[must_use]
pub fn as_datetime(value: &str) -> Option<DateTime<FixedOffset>> {
    if !is_canonical(value) {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }
    NaiveDateTime::parse_from_str(value, NAIVE_OUTPUT_FORMAT)
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Ordering key for report rows.
///
/// Rows with a real timestamp sort chronologically ahead of rows that only
/// carry the human-readable cell text, which sort lexically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReportOrder {
    Timestamp(DateTime<FixedOffset>),
    Human(String),
}

#[must_use]
pub fn report_order(report: &OutageReport) -> ReportOrder {
    report
        .time_iso
        .as_deref()
        .and_then(as_datetime)
        .map_or_else(
            || ReportOrder::Human(report.time_human.clone()),
            ReportOrder::Timestamp,
        )
}

/// Newest-first comparison for report rows; rows without a timestamp go last.
#[must_use]
pub fn newest_first(a: &OutageReport, b: &OutageReport) -> Ordering {
    match (report_order(a), report_order(b)) {
        (ReportOrder::Timestamp(x), ReportOrder::Timestamp(y)) => y.cmp(&x),
        (x, y) => x.cmp(&y),
    }
}

fn canonicalize(raw: &str) -> Option<String> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let with_offset: Cow<'_, str> = match s.strip_suffix(['Z', 'z']) {
        Some(head) => Cow::Owned(format!("{head}+00:00")),
        None => Cow::Borrowed(s),
    };

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, fmt) {
            return Some(dt.to_rfc3339_opts(SecondsFormat::AutoSi, false));
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.format(NAIVE_OUTPUT_FORMAT).to_string());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.format(NAIVE_OUTPUT_FORMAT).to_string())
}
