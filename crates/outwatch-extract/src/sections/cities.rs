use outwatch_core::CityRef;
use scraper::Html;

use crate::fields::{attribute_of, first_following, text_of};
use crate::selectors::CompiledSelectors;

/// Extract the cities listed under the live outage map heading.
///
/// Finds the first heading whose text contains the marker phrase, then the
/// first paragraph after it, and returns one entry per link inside that
/// paragraph, in document order and without deduplication. No heading
/// means no active outage map, which yields an empty list.
#[must_use]
pub fn parse_outage_cities(document: &Html, selectors: &CompiledSelectors) -> Vec<CityRef> {
    let queries = &selectors.outage_cities;

    let Some(heading) = document
        .select(&queries.heading)
        .find(|h| text_of(Some(*h)).contains(queries.marker.as_str()))
    else {
        return Vec::new();
    };

    let Some(paragraph) = first_following(document, heading, &queries.paragraph) else {
        tracing::debug!(section = "outage_cities", "marker heading has no following paragraph");
        return Vec::new();
    };

    paragraph
        .select(&queries.link)
        .map(|link| CityRef {
            city: text_of(Some(link)),
            link: attribute_of(Some(link), "href"),
        })
        .collect()
}
