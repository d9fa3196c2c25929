use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a map.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("OUTWATCH_ENV", "development"));
    let log_level = or_default("OUTWATCH_LOG_LEVEL", "info");

    let selectors_path = lookup("OUTWATCH_SELECTORS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let source_base_url = or_default(
        "OUTWATCH_SOURCE_BASE_URL",
        "https://istheservicedown.com/problems",
    );
    if !(source_base_url.starts_with("http://") || source_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "OUTWATCH_SOURCE_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got \"{source_base_url}\""),
        });
    }

    let reports_dir = PathBuf::from(or_default("OUTWATCH_REPORTS_DIR", "./reports"));

    Ok(AppConfig {
        env,
        log_level,
        selectors_path,
        source_base_url,
        reports_dir,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
