use crate::app_config::{AppConfig, Environment, TwitterCredentials};
use crate::ConfigError;

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
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let database_url = require("DATABASE_URL")?;
    let twitter = TwitterCredentials {
        consumer_key: require("TWITTER_CONSUMER_KEY")?,
        consumer_secret: require("TWITTER_CONSUMER_SECRET")?,
        bearer_token: optional("TWITTER_BEARER_TOKEN"),
    };

    let env = parse_environment(&or_default("STYLEPULSE_ENV", "development"))?;

    let bind_addr = or_default("STYLEPULSE_BIND_ADDR", "0.0.0.0:5000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("STYLEPULSE_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("STYLEPULSE_LOG_LEVEL", "info");

    let twitter_api_base_url = or_default("TWITTER_API_BASE_URL", "https://api.twitter.com");
    let twitter_timeout_secs = parse_u64("STYLEPULSE_TWITTER_TIMEOUT_SECS", "30")?;

    let collect_interval_secs = parse_u64("STYLEPULSE_COLLECT_INTERVAL_SECS", "120")?;
    if collect_interval_secs == 0 {
        return Err(invalid(
            "STYLEPULSE_COLLECT_INTERVAL_SECS",
            "interval must be greater than zero".to_string(),
        ));
    }

    let db_max_connections = parse_u32("STYLEPULSE_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("STYLEPULSE_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("STYLEPULSE_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        twitter,
        twitter_api_base_url,
        twitter_timeout_secs,
        collect_interval_secs,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STYLEPULSE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}
