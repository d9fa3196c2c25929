use super::*;

// -----------------------------------------------------------------------
// parse_document
// -----------------------------------------------------------------------

#[test]
fn empty_input_is_unparsable() {
    let err = parse_document("   \n").unwrap_err();
    assert!(matches!(err, ExtractError::DocumentUnparsable { .. }));
}

#[test]
fn plain_text_is_unparsable() {
    let err = parse_document("503 Service Unavailable").unwrap_err();
    assert!(
        matches!(err, ExtractError::DocumentUnparsable { ref reason } if reason.contains("no markup")),
        "unexpected error: {err:?}"
    );
}

#[test]
fn comment_only_is_unparsable() {
    let err = parse_document("<!-- cached page expired -->").unwrap_err();
    assert!(matches!(err, ExtractError::DocumentUnparsable { .. }));
}

#[test]
fn stray_angle_bracket_is_unparsable() {
    let err = parse_document("latency < 5ms").unwrap_err();
    assert!(
        matches!(err, ExtractError::DocumentUnparsable { ref reason } if reason.contains("no tags")),
        "unexpected error: {err:?}"
    );
}

#[test]
fn empty_skeleton_parses() {
    assert!(parse_document("<html><head></head><body></body></html>").is_ok());
    assert!(parse_document("<!DOCTYPE html>").is_ok());
}

#[test]
fn maintenance_page_extracts_to_empty_result() {
    let extractor = Extractor::default();
    for page in [
        "<html><body>maintenance</body></html>",
        "<html><body>Scheduled maintenance, back soon</body></html>",
        "<html><head></head><body></body></html>",
    ] {
        let result = extractor.extract_page(page).unwrap();
        assert_eq!(result, ExtractionResult::default(), "page: {page}");
    }
}

#[test]
fn malformed_markup_still_parses() {
    assert!(parse_document("<div><p>unclosed <b>tags").is_ok());
}

// -----------------------------------------------------------------------
// extract
// -----------------------------------------------------------------------

#[test]
fn page_without_known_sections_yields_empty_result() {
    let document = parse_document("<html><body><p>Hello</p></body></html>").unwrap();
    let result = extract(&document, &CompiledSelectors::default());
    assert_eq!(result, ExtractionResult::default());
}

#[test]
fn broken_section_does_not_hide_others() {
    // The problem list lost its class and the chart widget is gone; the
    // table and feed are still extracted.
    let html = r#"<html><body>
        <ol class="renamed-list"><li><p>Internet <span>50%</span></p></li></ol>
        <table id="latestreports">
          <tr><td>Dallas</td><td>Internet</td><td><time datetime="2024-03-01T14:05:00Z">now</time></td></tr>
        </table>
        <ul class="reports"><li><span class="pseudolink">kim</span></li></ul>
    </body></html>"#;

    let result = Extractor::default().extract_page(html).unwrap();
    assert!(result.problems.is_empty());
    assert!(result.chart.is_empty());
    assert_eq!(result.reports.len(), 1);
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].user.as_deref(), Some("kim"));
}

#[test]
fn custom_contract_follows_markup_drift() {
    let mut config = SelectorConfig::default();
    config.problems.item = "ol.renamed-list > li".to_string();
    let extractor = Extractor::new(&config).unwrap();

    let result = extractor
        .extract_page(r#"<ol class="renamed-list"><li><p>Internet <span>50%</span></p></li></ol>"#)
        .unwrap();
    assert_eq!(result.problems.len(), 1);
    assert_eq!(result.problems[0].percent, Some(50));
}

#[test]
fn extraction_is_repeatable_on_the_same_document() {
    let document = parse_document(
        r#"<ul class="reports"><li><p><span>slow</span></p></li></ul>
           <h3>Live Outage Map</h3><p><a href="/a">A</a></p>"#,
    )
    .unwrap();
    let selectors = CompiledSelectors::default();
    let first = extract(&document, &selectors);
    let second = extract(&document, &selectors);
    assert_eq!(first, second);
    assert_eq!(first.outage_cities.len(), 1);
}
