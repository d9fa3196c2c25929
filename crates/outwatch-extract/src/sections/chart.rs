use outwatch_core::ChartInfo;
use scraper::Html;

use crate::fields::{attribute_of, first_in_document};
use crate::selectors::CompiledSelectors;

/// Extract chart metadata: the timestamp assigned in inline script, the chart
/// image, and a date-time mined from the image alt text.
///
/// The three lookups are independent; any subset may come back empty.
#[must_use]
pub fn parse_chart(document: &Html, selectors: &CompiledSelectors) -> ChartInfo {
    let queries = &selectors.chart;

    let chart_timestamp = document.select(&queries.script).find_map(|script| {
        let body: String = script.text().collect();
        queries
            .timestamp
            .captures(&body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    });

    let image = first_in_document(document, &queries.image);
    let image_url = attribute_of(image, "src");
    let image_alt = attribute_of(image, "alt");

    let alt_time = image_alt.as_deref().and_then(|alt| {
        queries
            .alt_time
            .captures(alt)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(0)))
            .map(|m| m.as_str().to_string())
    });

    ChartInfo {
        chart_timestamp,
        image_url,
        image_alt,
        alt_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> ChartInfo {
        parse_chart(&Html::parse_document(html), &CompiledSelectors::default())
    }

    #[test]
    fn extracts_all_three_parts() {
        let chart = parse(
            r#"<html><head><script>var other = 1;</script>
            <script>var chartTs = 1709301900; drawChart();</script></head>
            <body><div id="chart-container">
              <img id="chart-img" src="https://img.example/att.png"
                   alt="AT&amp;T outage chart 03/01/2024 14:05 UTC">
            </div></body></html>"#,
        );
        assert_eq!(chart.chart_timestamp.as_deref(), Some("1709301900"));
        assert_eq!(chart.image_url.as_deref(), Some("https://img.example/att.png"));
        assert_eq!(
            chart.image_alt.as_deref(),
            Some("AT&T outage chart 03/01/2024 14:05 UTC")
        );
        assert_eq!(chart.alt_time.as_deref(), Some("03/01/2024 14:05"));
    }

    #[test]
    fn image_without_script_timestamp() {
        let chart = parse(
            r#"<div id="chart-container"><img id="chart-img" src="/c.png" alt="chart"></div>"#,
        );
        assert!(chart.chart_timestamp.is_none());
        assert_eq!(chart.image_url.as_deref(), Some("/c.png"));
        assert!(chart.alt_time.is_none());
    }

    #[test]
    fn script_timestamp_without_image() {
        let chart = parse("<script>let chartTs=42</script><p>no chart</p>");
        assert_eq!(chart.chart_timestamp.as_deref(), Some("42"));
        assert!(chart.image_url.is_none());
        assert!(chart.image_alt.is_none());
    }

    #[test]
    fn first_matching_script_wins() {
        let chart = parse("<script>var chartTs = 1;</script><script>var chartTs = 2;</script>");
        assert_eq!(chart.chart_timestamp.as_deref(), Some("1"));
    }

    #[test]
    fn similarly_named_variable_is_ignored() {
        let chart = parse("<script>var oldchartTs = 9;</script>");
        assert!(chart.chart_timestamp.is_none());
    }

    #[test]
    fn absent_chart_is_empty() {
        assert!(parse("<p>nothing here</p>").is_empty());
    }
}
