use outwatch_core::OutageReport;
use scraper::{ElementRef, Html};

use crate::fields::{attribute_of, first_in, text_of};
use crate::selectors::CompiledSelectors;
use crate::timestamp::normalize;

/// Extract the latest-reports table.
///
/// Only rows with exactly three cells (city, reason, time) are kept. Header,
/// footer and malformed rows are skipped individually, preserving the order
/// of the remaining rows.
#[must_use]
pub fn parse_reports(document: &Html, selectors: &CompiledSelectors) -> Vec<OutageReport> {
    let queries = &selectors.reports;
    let mut reports = Vec::new();

    for (index, row) in document.select(&queries.row).enumerate() {
        let cells: Vec<ElementRef<'_>> = row.select(&queries.cell).collect();
        let [city, reason, time] = cells.as_slice() else {
            tracing::debug!(
                section = "reports",
                index,
                cells = cells.len(),
                "skipping row with unexpected cell count"
            );
            continue;
        };

        let time_el = first_in(*time, &queries.time);
        reports.push(OutageReport {
            city: text_of(Some(*city)),
            reason: text_of(Some(*reason)),
            time_human: text_of(Some(*time)),
            time_iso: normalize(attribute_of(time_el, &queries.time_attribute).as_deref()),
        });
    }

    reports
}
