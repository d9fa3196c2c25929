//! Total accessors over optional elements.
//!
//! Every section parser composes from these. None of them fail: an absent
//! element yields an empty string or `None`, never an error.

use scraper::{ElementRef, Html, Selector};

/// Trimmed visible text of `element`, whitespace runs collapsed to one space.
/// Returns an empty string when the element is absent.
#[must_use]
pub fn text_of(element: Option<ElementRef<'_>>) -> String {
    element.map_or_else(String::new, |el| collapse_whitespace(&el.text().collect::<String>()))
}

/// Like [`text_of`], but `None` when the element is absent.
///
/// A present element with no text yields `Some("")`, keeping "absent" and
/// "present but empty" apart.
#[must_use]
pub fn optional_text(element: Option<ElementRef<'_>>) -> Option<String> {
    element.map(|el| text_of(Some(el)))
}

/// Value of attribute `name`, or `None` if the element or attribute is absent.
#[must_use]
pub fn attribute_of(element: Option<ElementRef<'_>>, name: &str) -> Option<String> {
    element
        .and_then(|el| el.value().attr(name))
        .map(str::to_string)
}

/// First descendant of `scope` matching `selector`.
#[must_use]
pub fn first_in<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// First element in the document matching `selector`.
#[must_use]
pub fn first_in_document<'a>(document: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    document.select(selector).next()
}

/// First element after `anchor` in document order matching `selector`.
///
/// The search starts right after the anchor's opening tag, so it covers the
/// anchor's own children before its following siblings and their subtrees.
#[must_use]
pub fn first_following<'a>(
    document: &'a Html,
    anchor: ElementRef<'a>,
    selector: &Selector,
) -> Option<ElementRef<'a>> {
    document
        .tree
        .root()
        .descendants()
        .skip_while(|node| node.id() != anchor.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| selector.matches(el))
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `Some(s)` unless `s` is empty.
pub(crate) fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
