use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("JUICEDEX_ENV", "development"));
    let log_level = or_default("JUICEDEX_LOG_LEVEL", "info");

    let sites_path = PathBuf::from(or_default("JUICEDEX_SITES_PATH", "./config/sites.yaml"));
    let aliases_path = PathBuf::from(or_default(
        "JUICEDEX_ALIASES_PATH",
        "./config/custom_aliases.json",
    ));
    let image_overrides_path = PathBuf::from(or_default(
        "JUICEDEX_IMAGE_OVERRIDES_PATH",
        "./config/additional_images.json",
    ));
    let views_path = PathBuf::from(or_default("JUICEDEX_VIEWS_PATH", "./config/views.json"));

    let audit_window = parse_usize("JUICEDEX_AUDIT_WINDOW", "50")?;
    let audit_min_ratio = parse_f64("JUICEDEX_AUDIT_MIN_RATIO", "0.6")?;
    if !(0.0..=1.0).contains(&audit_min_ratio) {
        return Err(ConfigError::InvalidEnvVar {
            var: "JUICEDEX_AUDIT_MIN_RATIO".to_string(),
            reason: format!("must be within [0, 1], got {audit_min_ratio}"),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        sites_path,
        aliases_path,
        image_overrides_path,
        views_path,
        audit_window,
        audit_min_ratio,
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
