//! Client configuration baked in at build time.
//!
//! A WASM bundle has no process environment, so values are read with
//! `option_env!` when the crate is compiled:
//!
//! - `PORTAL_API_BASE`: origin prefix for `/api/*` calls (default: same origin)
//! - `PORTAL_REDIRECT_DELAY_MS`: delay before the post-login redirect (default 1000)
//! - `PORTAL_LOG_LEVEL`: browser console log level (default `info`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 1000;
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Errors produced while parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The redirect delay is not a whole number of milliseconds.
    #[error("invalid redirect delay {value:?}: expected milliseconds")]
    InvalidRedirectDelay { value: String },

    /// The log level is not one of `error`, `warn`, `info`, `debug`, `trace`.
    #[error("invalid log level {value:?}")]
    InvalidLogLevel { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined in front of every endpoint path. Empty means same origin.
    pub api_base: String,
    /// How long the success message stays up before a form redirects.
    pub redirect_delay: Duration,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            redirect_delay: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    /// Build the config from variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a captured value cannot be parsed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("PORTAL_API_BASE"),
            option_env!("PORTAL_REDIRECT_DELAY_MS"),
            option_env!("PORTAL_LOG_LEVEL"),
        )
    }

    /// Build the config from raw optional values; `None` selects the default.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the delay or log level is malformed.
    pub fn from_values(
        api_base: Option<&str>,
        redirect_delay_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: parse_api_base(api_base),
            redirect_delay: parse_redirect_delay(redirect_delay_ms)?,
            log_level: parse_log_level(log_level)?,
        })
    }
}

fn parse_api_base(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .map(|base| base.trim_end_matches('/'))
        .unwrap_or_default()
        .to_owned()
}

fn parse_redirect_delay(raw: Option<&str>) -> Result<Duration, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS)),
        Some(value) => value
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidRedirectDelay { value: value.to_owned() }),
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => value
            .parse::<log::Level>()
            .map_err(|_| ConfigError::InvalidLogLevel { value: value.to_owned() }),
    }
}
