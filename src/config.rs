//! Server configuration loaded from the environment.

use chrono::Duration;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HORIZON: usize = 10;
const DEFAULT_STRIDE_DAYS: i64 = 7;

/// Errors raised while reading configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: `{value}`")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid listen address `{0}`")]
    InvalidAddress(String),
}

/// Settings the prediction service needs per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceSettings {
    /// Number of future periods to forecast.
    pub horizon: usize,
    /// Spacing between consecutive forecast timestamps.
    pub stride: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            stride: Duration::days(DEFAULT_STRIDE_DAYS),
        }
    }
}

/// Full server configuration.
///
/// | Variable               | Default   |
/// |------------------------|-----------|
/// | `HOST`                 | `0.0.0.0` |
/// | `PORT`                 | `3000`    |
/// | `FORECAST_HORIZON`     | `10`      |
/// | `FORECAST_STRIDE_DAYS` | `7`       |
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub horizon: usize,
    pub stride_days: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            horizon: DEFAULT_HORIZON,
            stride_days: DEFAULT_STRIDE_DAYS,
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse_or("PORT", &lookup, defaults.port)?;
        let horizon = parse_or("FORECAST_HORIZON", &lookup, defaults.horizon)?;
        let stride_days = parse_or("FORECAST_STRIDE_DAYS", &lookup, defaults.stride_days)?;

        if horizon < 1 {
            return Err(ConfigError::InvalidValue {
                key: "FORECAST_HORIZON",
                value: horizon.to_string(),
            });
        }
        if stride_days < 1 {
            return Err(ConfigError::InvalidValue {
                key: "FORECAST_STRIDE_DAYS",
                value: stride_days.to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            horizon,
            stride_days,
        })
    }

    /// Address to bind the listener to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            horizon: self.horizon,
            stride: Duration::days(self.stride_days),
        }
    }
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
