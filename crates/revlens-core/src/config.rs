use thiserror::Error;

use crate::app_config::{AppConfig, Environment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let sentiment_url = require("REVLENS_SENTIMENT_URL")?;
    let zero_shot_url = require("REVLENS_ZERO_SHOT_URL")?;

    let env = parse_environment(&or_default("REVLENS_ENV", "development"));

    let bind_addr = parse_addr("REVLENS_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("REVLENS_LOG_LEVEL", "info");

    let sentiment_model = or_default(
        "REVLENS_SENTIMENT_MODEL",
        "distilbert-base-uncased-finetuned-sst-2-english",
    );

    let extractor_nav_timeout_secs = parse_u64("REVLENS_EXTRACTOR_NAV_TIMEOUT_SECS", "15")?;
    let extractor_settle_delay_ms = parse_u64("REVLENS_EXTRACTOR_SETTLE_DELAY_MS", "1500")?;
    let extractor_user_agent = or_default(
        "REVLENS_EXTRACTOR_USER_AGENT",
        "revlens/0.1 (review-analysis)",
    );
    let extractor_max_pages = parse_u32("REVLENS_EXTRACTOR_MAX_PAGES", "20")?;
    let min_review_chars = parse_usize("REVLENS_MIN_REVIEW_CHARS", "10")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        sentiment_url,
        zero_shot_url,
        sentiment_model,
        extractor_nav_timeout_secs,
        extractor_settle_delay_ms,
        extractor_user_agent,
        extractor_max_pages,
        min_review_chars,
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
