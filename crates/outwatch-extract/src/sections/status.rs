use outwatch_core::{ServiceHeader, ServiceStatus};
use scraper::Html;

use crate::fields::{attribute_of, collapse_whitespace, first_in, first_in_document, optional_text};
use crate::selectors::CompiledSelectors;

/// Extract the provider heading block.
#[must_use]
pub fn parse_service_header(document: &Html, selectors: &CompiledSelectors) -> ServiceHeader {
    let queries = &selectors.header;
    ServiceHeader {
        title: optional_text(first_in_document(document, &queries.title)),
        subtitle: optional_text(first_in_document(document, &queries.subtitle)),
        logo_url: attribute_of(first_in_document(document, &queries.logo), "src"),
    }
}

/// Extract the status alert box. A page without one yields all-`None`.
#[must_use]
pub fn parse_service_status(document: &Html, selectors: &CompiledSelectors) -> ServiceStatus {
    let queries = &selectors.status;
    let Some(alert) = first_in_document(document, &queries.alert_box) else {
        return ServiceStatus::default();
    };

    let status_class = attribute_of(Some(alert), "class")
        .map(|classes| collapse_whitespace(&classes))
        .filter(|classes| !classes.is_empty());

    ServiceStatus {
        status_class,
        title: optional_text(first_in(alert, &queries.title)),
        summary: optional_text(first_in(alert, &queries.summary)),
    }
}
