//! `extract` command: saved page in, scored JSON out.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use outwatch_core::{AppConfig, ExtractionResult, SelectorConfig};
use outwatch_extract::Extractor;
use outwatch_insight::{PainIndex, PainInputs};
use serde::Serialize;

#[derive(Debug)]
pub(crate) struct ExtractOptions {
    pub input: PathBuf,
    pub selectors: Option<PathBuf>,
    pub provider: Option<String>,
    pub pretty: bool,
    pub save: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExtractOutput {
    pub provider: String,
    pub extraction: ExtractionResult,
    pub pain_inputs: PainInputs,
    pub pain_index: PainIndex,
}

/// Run the `extract` command and return the rendered JSON.
///
/// # Errors
///
/// Returns an error if the selector contract or input page cannot be read,
/// the contract does not compile, the page is not a document, or the
/// report cannot be written.
pub(crate) fn run_extract(config: &AppConfig, options: &ExtractOptions) -> anyhow::Result<String> {
    let selector_config = resolve_selectors(config, options.selectors.as_deref())?;
    let extractor = Extractor::new(&selector_config)?;

    let raw = std::fs::read_to_string(&options.input)
        .with_context(|| format!("failed to read {}", options.input.display()))?;
    let provider = options
        .provider
        .clone()
        .unwrap_or_else(|| provider_from_path(&options.input));

    let output = extract_output(&extractor, &raw, provider)?;
    let json = if options.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    if options.save {
        let path = save_report(&config.reports_dir, &output.provider, &json)?;
        tracing::info!(path = %path.display(), "saved extraction report");
    }

    Ok(json)
}

/// Extract `raw` and derive its pain inputs.
///
/// # Errors
///
/// Returns an error if `raw` is not an HTML document.
pub(crate) fn extract_output(
    extractor: &Extractor,
    raw: &str,
    provider: String,
) -> anyhow::Result<ExtractOutput> {
    let extraction = extractor.extract_page(raw)?;
    let pain_inputs = PainInputs::from_extraction(&extraction);
    Ok(ExtractOutput {
        provider,
        pain_index: pain_inputs.pain_index(),
        pain_inputs,
        extraction,
    })
}

/// Command-line path wins over the configured one; neither means the default.
fn resolve_selectors(config: &AppConfig, cli_path: Option<&Path>) -> anyhow::Result<SelectorConfig> {
    match cli_path.or(config.selectors_path.as_deref()) {
        Some(path) => Ok(outwatch_core::load_selectors(path)?),
        None => Ok(SelectorConfig::default()),
    }
}

fn provider_from_path(path: &Path) -> String {
    path.file_stem().map_or_else(
        || "unknown".to_string(),
        |stem| stem.to_string_lossy().to_lowercase(),
    )
}

/// File-name-safe form of a provider name: lower-cased ASCII letters,
/// digits, `-` and `_`, with every other run of characters folded to `-`.
pub(crate) fn report_slug(provider: &str) -> String {
    let mut slug = String::with_capacity(provider.len());
    for c in provider.trim().chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "unknown".to_string()
    } else {
        slug.to_string()
    }
}

/// Write `json` to `<dir>/<provider slug>-<UTC timestamp>.json`.
fn save_report(dir: &Path, provider: &str, json: &str) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let file_name = format!(
        "{}-{}.json",
        report_slug(provider),
        Utc::now().format("%Y%m%dT%H%M%SZ")
    );
    let path = dir.join(file_name);
    std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
