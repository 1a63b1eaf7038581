//! Integration tests for the Twelve Data supplier

use goldwatch::services::market_data::{MarketDataProvider, SupplyError};
use goldwatch::services::twelvedata::TwelveDataProvider;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{buy_closes, time_series_body};

#[tokio::test]
async fn fetches_series_with_expected_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/time_series"))
        .and(query_param("symbol", "XAU/USD"))
        .and(query_param("interval", "1h"))
        .and(query_param("outputsize", "500"))
        .and(query_param("apikey", "demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(time_series_body(&buy_closes())))
        .expect(1)
        .mount(&server)
        .await;

    let provider = TwelveDataProvider::with_base_url(server.uri(), "demo");
    let series = provider.get_series("XAU/USD", "1h", 500).await.unwrap();

    assert_eq!(series.closes(), buy_closes());
}

#[tokio::test]
async fn api_error_payload_is_typed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/time_series"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 429,
            "message": "You have run out of API credits for the current minute.",
            "status": "error"
        })))
        .mount(&server)
        .await;

    let provider = TwelveDataProvider::with_base_url(server.uri(), "demo");
    let err = provider.get_series("XAU/USD", "1h", 500).await.unwrap_err();

    assert!(matches!(err, SupplyError::Api { code: Some(429), .. }));
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/time_series"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let provider = TwelveDataProvider::with_base_url(server.uri(), "demo");
    let err = provider.get_series("XAU/USD", "1h", 500).await.unwrap_err();

    assert!(matches!(err, SupplyError::Malformed(_)));
}
