use std::sync::LazyLock;

use outwatch_core::ProblemCategory;
use regex::Regex;
use scraper::Html;

use crate::fields::{attribute_of, collapse_whitespace, first_in, non_empty, text_of};
use crate::selectors::CompiledSelectors;

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*%").expect("valid percent regex"));
static PERCENT_ANNOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\d+\s*%\s*\)").expect("valid annotation regex"));

/// Extract the "most reported problems" breakdown in document order.
///
/// The percentage comes from the nested text span when it has text, else
/// from the image `alt` attribute. A percentage that cannot be read is
/// `None`, not zero. Percentages are not normalized across categories.
#[must_use]
pub fn parse_problems(document: &Html, selectors: &CompiledSelectors) -> Vec<ProblemCategory> {
    let queries = &selectors.problems;
    let mut problems = Vec::new();

    for (index, item) in document.select(&queries.item).enumerate() {
        let raw_label = text_of(first_in(item, &queries.label));
        let label = strip_percent_annotation(&raw_label);

        let percent_source = non_empty(text_of(first_in(item, &queries.percent_text)))
            .or_else(|| attribute_of(first_in(item, &queries.percent_image), "alt"));

        let percent = percent_source.as_deref().and_then(parse_percent);
        if percent.is_none() {
            if let Some(source) = percent_source.as_deref() {
                tracing::debug!(
                    section = "problems",
                    index,
                    source,
                    "unreadable category percentage"
                );
            }
        }

        problems.push(ProblemCategory { label, percent });
    }

    problems
}

/// First `NN%` in `text`, if it is a valid percentage (0–100).
fn parse_percent(text: &str) -> Option<u8> {
    let digits = PERCENT_RE.captures(text)?.get(1)?.as_str();
    digits.parse::<u8>().ok().filter(|pct| *pct <= 100)
}

/// Removes `(NN%)` annotations and tidies the remaining whitespace.
fn strip_percent_annotation(label: &str) -> String {
    collapse_whitespace(&PERCENT_ANNOTATION_RE.replace_all(label, " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Vec<ProblemCategory> {
        parse_problems(&Html::parse_document(html), &CompiledSelectors::default())
    }

    #[test]
    fn label_and_percent_from_span() {
        let problems = parse(
            r#"<ol class="doughtnut-list">
              <li><p>Internet <span>(45%)</span></p></li>
              <li><p>Total Blackout<span>(30%)</span></p></li>
            </ol>"#,
        );
        assert_eq!(
            problems,
            vec![
                ProblemCategory { label: "Internet".into(), percent: Some(45) },
                ProblemCategory { label: "Total Blackout".into(), percent: Some(30) },
            ]
        );
    }

    #[test]
    fn annotated_label_with_bare_percent_span() {
        let problems = parse(
            r#"<ol class="doughtnut-list"><li><p>Internet (<span>45%</span>)</p></li></ol>"#,
        );
        assert_eq!(
            problems,
            vec![ProblemCategory { label: "Internet".into(), percent: Some(45) }]
        );
    }

    #[test]
    fn falls_back_to_image_alt() {
        let problems = parse(
            r#"<ol class="doughtnut-list"><li><img alt="Mobile Phone 12%"><p>Mobile Phone</p></li></ol>"#,
        );
        assert_eq!(problems[0].label, "Mobile Phone");
        assert_eq!(problems[0].percent, Some(12));
    }

    #[test]
    fn span_text_takes_priority_over_image_alt() {
        let problems = parse(
            r#"<ol class="doughtnut-list"><li><img alt="99%"><p>TV <span>7%</span></p></li></ol>"#,
        );
        assert_eq!(problems[0].percent, Some(7));
    }

    #[test]
    fn empty_span_falls_through_to_image() {
        let problems = parse(
            r#"<ol class="doughtnut-list"><li><img alt="8%"><p>TV <span> </span></p></li></ol>"#,
        );
        assert_eq!(problems[0].percent, Some(8));
    }

    #[test]
    fn missing_percent_is_none_not_zero() {
        let problems = parse(r#"<ol class="doughtnut-list"><li><p>Landline</p></li></ol>"#);
        assert_eq!(problems[0].label, "Landline");
        assert_eq!(problems[0].percent, None);
    }

    #[test]
    fn zero_percent_is_kept() {
        let problems = parse(r#"<ol class="doughtnut-list"><li><p>Email <span>(0%)</span></p></li></ol>"#);
        assert_eq!(problems[0].percent, Some(0));
    }

    #[test]
    fn out_of_range_percent_is_none() {
        let problems = parse(r#"<ol class="doughtnut-list"><li><p>Odd <span>(250%)</span></p></li></ol>"#);
        assert_eq!(problems[0].percent, None);
    }

    #[test]
    fn nested_lists_are_not_items() {
        let problems = parse(
            r#"<ol class="doughtnut-list"><li><p>Internet <span>40%</span></p>
               <ul><li><p>nested</p></li></ul></li></ol>"#,
        );
        assert_eq!(problems.len(), 1);
    }

    #[test]
    fn absent_list_is_empty() {
        assert!(parse("<p>no breakdown</p>").is_empty());
    }
}
