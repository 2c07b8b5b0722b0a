use crate::app_config::AppConfig;
use crate::ConfigError;

/// Production GoFood restaurant listing endpoint.
pub const DEFAULT_GOFOOD_URL: &str = "https://gofood.co.id/gofood/web/v1/restaurants";

/// Resolves configuration from the process environment, reading a `.env`
/// file first if one is present.
///
/// # Errors
///
/// Returns `ConfigError` when a variable is set to an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Resolves configuration from variables already in the process, never
/// touching `.env` files. Callers that manage the environment themselves
/// (tests, containers) use this directly.
///
/// # Errors
///
/// Returns `ConfigError` when a variable is set to an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// All parsing and defaulting goes through `lookup`, so tests can substitute
/// a plain map for the real environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

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

    let bind_addr = parse_addr("MAKAN_BIND_ADDR", "0.0.0.0:3001")?;
    let log_level = or_default("MAKAN_LOG_LEVEL", "info");
    let gofood_base_url = or_default("MAKAN_GOFOOD_URL", DEFAULT_GOFOOD_URL);
    let request_timeout_secs = parse_u64("MAKAN_REQUEST_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("MAKAN_USER_AGENT", "makan/0.1 (merchant-discovery)");
    let sample_points = parse_usize("MAKAN_SAMPLE_POINTS", "3")?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        gofood_base_url,
        request_timeout_secs,
        user_agent,
        sample_points,
    })
}
