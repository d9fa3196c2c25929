//! One parser per semantic region of the page.
//!
//! Each parser reads the shared immutable document and its own slice of the
//! selector contract, and returns its record or an empty default. None of
//! them depends on another's output.

mod chart;
mod cities;
mod issues;
mod problems;
mod reports;
mod status;

pub use chart::parse_chart;
pub use cities::parse_outage_cities;
pub use issues::parse_issue_feed;
pub use problems::parse_problems;
pub use reports::parse_reports;
pub use status::{parse_service_header, parse_service_status};
