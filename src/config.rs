use std::env;

pub const DEFAULT_PORT: u16 = 8081;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API_ENDPOINT is not set")]
    MissingApiEndpoint,
    #[error("PORT is not a valid port number: {0:?}")]
    InvalidPort(String),
}

/// Startup configuration, read from the environment exactly once and then
/// carried in handler state.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_endpoint: String,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        let api_endpoint = env::var("API_ENDPOINT")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingApiEndpoint)?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Config { port, api_endpoint })
    }
}
