use crate::app_config::{AppConfig, Environment};
use crate::filter::LAPTOP_CATEGORY;
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
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("STOCKGROUP_ENV", "development"));

    let bind_addr = or_default("STOCKGROUP_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("STOCKGROUP_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("STOCKGROUP_LOG_LEVEL", "info");

    let max_upload_bytes = or_default("STOCKGROUP_MAX_UPLOAD_BYTES", "10485760")
        .parse::<usize>()
        .map_err(|e| invalid("STOCKGROUP_MAX_UPLOAD_BYTES", e.to_string()))?;
    if max_upload_bytes == 0 {
        return Err(invalid(
            "STOCKGROUP_MAX_UPLOAD_BYTES",
            "must be greater than zero".to_string(),
        ));
    }

    let category = or_default("STOCKGROUP_CATEGORY", LAPTOP_CATEGORY);
    if category.trim().is_empty() {
        return Err(invalid(
            "STOCKGROUP_CATEGORY",
            "must not be empty".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        max_upload_bytes,
        category,
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
