use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_USER_AGENT: &str = "housing-filter/0.1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Runtime settings of the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the marketplace REST API, without trailing slash
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
    /// Bearer token of a signed-in user, if any
    pub auth_token: Option<String>,
}

/// Load configuration, reading a `.env` file first when one exists.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key))
}

/// Build configuration from an env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let api_url = or_default("HOUSING_API_URL", DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string();
    if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
        return Err(ConfigError::InvalidEnvVar {
            var: "HOUSING_API_URL".to_string(),
            reason: format!("expected an http(s) URL, got \"{}\"", api_url),
        });
    }

    let raw_timeout = or_default("HOUSING_REQUEST_TIMEOUT_SECS", "30");
    let request_timeout_secs =
        raw_timeout
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "HOUSING_REQUEST_TIMEOUT_SECS".to_string(),
                reason: e.to_string(),
            })?;

    let auth_token = lookup("HOUSING_AUTH_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty());

    Ok(AppConfig {
        api_url,
        request_timeout_secs,
        user_agent: or_default("HOUSING_USER_AGENT", DEFAULT_USER_AGENT),
        log_level: or_default("HOUSING_LOG_LEVEL", "info"),
        auth_token,
    })
}
