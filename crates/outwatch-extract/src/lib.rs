//! HTML-to-record extraction for outage status pages.
//!
//! A page is parsed once into an immutable tree, then each section parser
//! reads its own fragment through the [`CompiledSelectors`] contract. Missing
//! markup never fails a section; the only fatal condition is input that is
//! not a document at all ([`ExtractError::DocumentUnparsable`]).

pub mod document;
pub mod error;
pub mod fields;
pub mod sections;
pub mod selectors;
pub mod timestamp;

pub use document::{extract, parse_document, Extractor};
pub use error::ExtractError;
pub use scraper::Html;
pub use selectors::CompiledSelectors;
