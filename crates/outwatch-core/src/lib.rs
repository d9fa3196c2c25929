//! Shared data model and configuration for the outwatch workspace.
//!
//! The record types here are what the extraction layer produces and what
//! downstream collaborators (generator, persistence) consume. Nothing in
//! this crate touches HTML.

pub mod app_config;
pub mod config;
pub mod error;
pub mod selectors;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use selectors::{load_selectors, parse_selectors, SelectorConfig};
pub use types::{
    ChartInfo, CityRef, ExtractionResult, IssueEntry, OutageReport, ProblemCategory,
    ServiceHeader, ServiceStatus, StatusLevel,
};
