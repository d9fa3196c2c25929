use outwatch_core::IssueEntry;
use scraper::Html;

use crate::fields::{attribute_of, first_in, optional_text};
use crate::selectors::CompiledSelectors;
use crate::timestamp::normalize;

/// Extract community reports from the issue feed.
///
/// Every list item becomes an entry. A missing sub-element leaves only that
/// field `None`; partial entries are kept.
#[must_use]
pub fn parse_issue_feed(document: &Html, selectors: &CompiledSelectors) -> Vec<IssueEntry> {
    let queries = &selectors.issues;

    document
        .select(&queries.item)
        .map(|item| {
            let time_el = first_in(item, &queries.time);
            IssueEntry {
                user: optional_text(first_in(item, &queries.user)),
                text: optional_text(first_in(item, &queries.text)),
                time_iso: normalize(attribute_of(time_el, &queries.time_attribute).as_deref()),
                location: optional_text(first_in(item, &queries.location)),
            }
        })
        .collect()
}
