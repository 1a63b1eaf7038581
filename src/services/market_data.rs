//! Market data provider interface.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::models::series::{PriceSeries, SeriesError};

/// Why no usable price series came back. Always recoverable for the engine.
#[derive(Debug, Error)]
pub enum SupplyError {
    #[error("market data transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("market data API error (code {code:?}): {message}")]
    Api { code: Option<i64>, message: String },
    #[error("market data response has no values")]
    MissingValues,
    #[error("malformed market data: {0}")]
    Malformed(String),
    #[error("invalid price series: {0}")]
    Series(#[from] SeriesError),
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get the most recent `limit` bars for a symbol, oldest first.
    async fn get_series(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<PriceSeries, SupplyError>;
}

#[async_trait]
impl<T: MarketDataProvider + ?Sized> MarketDataProvider for Arc<T> {
    async fn get_series(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<PriceSeries, SupplyError> {
        (**self).get_series(symbol, interval, limit).await
    }
}
