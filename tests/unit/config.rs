//! Unit tests for environment configuration

use goldwatch::config::{Config, ConfigError};
use std::collections::HashMap;
use std::path::PathBuf;

fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = from_pairs(&[]).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.signal_state_path, PathBuf::from("last_signal.json"));
    assert_eq!(config.telegram, None);
    assert_eq!(
        config.require_api_key(),
        Err(ConfigError::Missing("TWELVE_DATA_API_KEY"))
    );
}

#[test]
fn test_overrides() {
    let config = from_pairs(&[
        ("TWELVE_DATA_API_KEY", "demo"),
        ("SYMBOL", "XAG/USD"),
        ("OUTPUT_SIZE", "200"),
        ("EVAL_INTERVAL_SECONDS", "0"),
        ("TELEGRAM_BOT_TOKEN", "123:abc"),
        ("TELEGRAM_CHAT_ID", "42"),
        ("SIGNAL_STATE_PATH", "/var/lib/goldwatch/state.json"),
    ])
    .unwrap();

    assert_eq!(config.require_api_key(), Ok("demo"));
    assert_eq!(config.symbol, "XAG/USD");
    assert_eq!(config.output_size, 200);
    assert_eq!(config.eval_interval_seconds, 0);
    let telegram = config.telegram.unwrap();
    assert_eq!(telegram.chat_id, "42");
    assert_eq!(telegram.api_url, "https://api.telegram.org");
}

#[test]
fn test_telegram_needs_both_token_and_chat() {
    let config = from_pairs(&[("TELEGRAM_BOT_TOKEN", "123:abc")]).unwrap();
    assert_eq!(config.telegram, None);
}

#[test]
fn test_invalid_number_rejected() {
    let err = from_pairs(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(
        err,
        ConfigError::Invalid {
            key: "PORT",
            value: "eighty".to_string()
        }
    );
}
