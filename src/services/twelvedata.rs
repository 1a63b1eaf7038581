//! Twelve Data `time_series` REST supplier.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::models::series::{Observation, PriceSeries};
use crate::services::market_data::{MarketDataProvider, SupplyError};

pub const DEFAULT_BASE_URL: &str = "https://api.twelvedata.com";

#[derive(Debug, Deserialize)]
struct TimeSeriesResponse {
    #[serde(default)]
    values: Option<Vec<TimeSeriesValue>>,
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TimeSeriesValue {
    datetime: String,
    open: String,
    high: String,
    low: String,
    close: String,
    #[serde(default)]
    volume: Option<String>,
}

pub struct TwelveDataProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TwelveDataProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(base_url, api_key, client)
    }

    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl MarketDataProvider for TwelveDataProvider {
    async fn get_series(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<PriceSeries, SupplyError> {
        let url = format!("{}/time_series", self.base_url);
        let outputsize = limit.to_string();

        debug!(symbol = %symbol, interval = %interval, limit, "Requesting time series");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", interval),
                ("outputsize", outputsize.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let body = response.text().await?;
        parse_time_series(&body)
    }
}

/// Parse a `time_series` response body into an ordered series.
///
/// Values arrive newest-first with numbers encoded as strings; a body without
/// `values` is an API error.
pub fn parse_time_series(body: &str) -> Result<PriceSeries, SupplyError> {
    let response: TimeSeriesResponse = serde_json::from_str(body)
        .map_err(|e| SupplyError::Malformed(format!("invalid JSON: {}", e)))?;

    let values = match response.values {
        Some(values) => values,
        None => {
            return Err(match response.message {
                Some(message) => SupplyError::Api {
                    code: response.code,
                    message,
                },
                None => SupplyError::MissingValues,
            })
        }
    };

    let observations = values
        .iter()
        .map(to_observation)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PriceSeries::from_unordered(observations)?)
}

fn to_observation(value: &TimeSeriesValue) -> Result<Observation, SupplyError> {
    let mut observation = Observation::new(
        parse_datetime(&value.datetime)?,
        parse_price("open", &value.open)?,
        parse_price("high", &value.high)?,
        parse_price("low", &value.low)?,
        parse_price("close", &value.close)?,
    );

    // volume is often absent or empty for FX and metals
    if let Some(volume) = value.volume.as_deref().filter(|v| !v.trim().is_empty()) {
        observation = observation.with_volume(parse_price("volume", volume)?);
    }

    Ok(observation)
}

fn parse_price(field: &str, raw: &str) -> Result<f64, SupplyError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SupplyError::Malformed(format!("{} is not a number: {:?}", field, raw)))
}

fn parse_datetime(raw: &str) -> Result<DateTime<Utc>, SupplyError> {
    let raw = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| SupplyError::Malformed(format!("unrecognised datetime {:?}", raw)))
}
