//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::models::indicators::IndicatorParams;
use crate::services::twelvedata::DEFAULT_BASE_URL;

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Get the deployment environment name (`APP_ENV`, default `sandbox`).
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    pub api_url: String,
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub twelve_data_api_key: Option<String>,
    pub twelve_data_base_url: String,
    pub symbol: String,
    pub interval: String,
    pub output_size: usize,
    pub telegram: Option<TelegramConfig>,
    pub signal_state_path: PathBuf,
    /// Seconds between worker cycles; 0 runs a single cycle.
    pub eval_interval_seconds: u64,
    pub port: u16,
    pub series_cache_seconds: u64,
    pub indicators: IndicatorParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            twelve_data_api_key: None,
            twelve_data_base_url: DEFAULT_BASE_URL.to_string(),
            symbol: "XAU/USD".to_string(),
            interval: "1h".to_string(),
            output_size: 500,
            telegram: None,
            signal_state_path: PathBuf::from("last_signal.json"),
            eval_interval_seconds: 3600,
            port: 8080,
            series_cache_seconds: 3600,
            indicators: IndicatorParams::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let telegram = match (get("TELEGRAM_BOT_TOKEN"), get("TELEGRAM_CHAT_ID")) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramConfig {
                api_url: get("TELEGRAM_API_URL")
                    .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
                bot_token,
                chat_id,
            }),
            _ => None,
        };

        Ok(Self {
            twelve_data_api_key: get("TWELVE_DATA_API_KEY"),
            twelve_data_base_url: get("TWELVE_DATA_BASE_URL")
                .unwrap_or(defaults.twelve_data_base_url),
            symbol: get("SYMBOL").unwrap_or(defaults.symbol),
            interval: get("INTERVAL").unwrap_or(defaults.interval),
            output_size: parse_or("OUTPUT_SIZE", get("OUTPUT_SIZE"), defaults.output_size)?,
            telegram,
            signal_state_path: get("SIGNAL_STATE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.signal_state_path),
            eval_interval_seconds: parse_or(
                "EVAL_INTERVAL_SECONDS",
                get("EVAL_INTERVAL_SECONDS"),
                defaults.eval_interval_seconds,
            )?,
            port: parse_or("PORT", get("PORT"), defaults.port)?,
            series_cache_seconds: parse_or(
                "SERIES_CACHE_SECONDS",
                get("SERIES_CACHE_SECONDS"),
                defaults.series_cache_seconds,
            )?,
            indicators: defaults.indicators,
        })
    }

    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.twelve_data_api_key
            .as_deref()
            .ok_or(ConfigError::Missing("TWELVE_DATA_API_KEY"))
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
