// Runtime configuration read from the environment.
//
// Every value has a default; a value that is set but malformed is an error rather
// than silently falling back.

use crate::shared::core::primitives::LocalCalendar;
use chrono_tz::Tz;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const BIND_ADDR: &str = "TIMELINE_BIND_ADDR";
pub const TIME_ZONE: &str = "TIMELINE_TIME_ZONE";
pub const AUTO_FILL_INTERVAL_SECS: &str = "TIMELINE_AUTO_FILL_INTERVAL_SECS";
pub const AUTO_FILL_DEBOUNCE_SECS: &str = "TIMELINE_AUTO_FILL_DEBOUNCE_SECS";
pub const TRANSCRIPTION_TIMEOUT_SECS: &str = "TIMELINE_TRANSCRIPTION_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub calendar: LocalCalendar,
    pub auto_fill_interval: Duration,
    pub auto_fill_debounce: Duration,
    pub transcription_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_or(&lookup, BIND_ADDR, SocketAddr::from(([0, 0, 0, 0], 8080)))?;
        let calendar = LocalCalendar::new(parse_or(&lookup, TIME_ZONE, Tz::UTC)?);
        Ok(Self {
            bind_addr,
            calendar,
            auto_fill_interval: Duration::from_secs(parse_or(&lookup, AUTO_FILL_INTERVAL_SECS, 3600)?),
            auto_fill_debounce: Duration::from_secs(parse_or(&lookup, AUTO_FILL_DEBOUNCE_SECS, 300)?),
            transcription_timeout: Duration::from_secs(parse_or(
                &lookup,
                TRANSCRIPTION_TIMEOUT_SECS,
                10,
            )?),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
