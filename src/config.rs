use std::time::Duration;

use reqwest::Url;

use crate::profiles::Profiles;

pub const DEFAULT_API_BASE: &str = "https://api.elevenlabs.io/v1";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a number, got '{0}'")]
    InvalidPort(String),

    #[error("UPSTREAM_TIMEOUT_SECS must be a number of seconds, got '{0}'")]
    InvalidTimeout(String),

    #[error("ELEVENLABS_API_BASE must be an absolute base URL, got '{0}'")]
    InvalidApiBase(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_base: Url,
    pub upstream_timeout: Duration,
    pub profiles: Profiles,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            None => Duration::from_secs(30),
        };

        let raw_base = lookup("ELEVENLABS_API_BASE")
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = Url::parse(&raw_base)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or(ConfigError::InvalidApiBase(raw_base))?;

        Ok(Self {
            host,
            port,
            api_base,
            upstream_timeout,
            profiles: Profiles::from_lookup(&lookup),
        })
    }
}
