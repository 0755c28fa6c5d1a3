// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Always ends in `/` so endpoint paths join underneath it.
    pub api_base_url: Url,
    pub api_token: Option<String>,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:3000".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| invalid("BIND_ADDR", e))?;

        let max_workers = match get("MAX_WORKERS") {
            Some(v) => v
                .parse::<usize>()
                .map_err(|e| invalid("MAX_WORKERS", e))?,
            None => 8,
        };
        if max_workers == 0 {
            return Err(invalid("MAX_WORKERS", "must be at least 1"));
        }

        let mut base = get("RESIDENTS_API_URL")
            .unwrap_or_else(|| "http://127.0.0.1:8000/api/".to_string());
        if !base.ends_with('/') {
            base.push('/');
        }
        let api_base_url = Url::parse(&base).map_err(|e| invalid("RESIDENTS_API_URL", e))?;
        if api_base_url.cannot_be_a_base() {
            return Err(invalid("RESIDENTS_API_URL", "not a base URL"));
        }

        let timeout_secs: u64 = match get("RESIDENTS_API_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .map_err(|e| invalid("RESIDENTS_API_TIMEOUT_SECS", e))?,
            None => 30,
        };

        Ok(Self {
            bind_addr,
            max_workers,
            api_base_url,
            api_token: get("RESIDENTS_API_TOKEN"),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn invalid(var: &'static str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        var,
        reason: reason.to_string(),
    }
}
