//! Integration tests for the Telegram notifier

use chrono::{TimeZone, Utc};
use goldwatch::alerts::notifier::{LogNotifier, Notifier, NotifyError, TelegramNotifier};
use goldwatch::models::signal::{AlertEvent, TradingState};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{mock_telegram, TELEGRAM_CHAT_ID, TELEGRAM_TOKEN};

fn alert() -> AlertEvent {
    AlertEvent {
        state: TradingState::Sell,
        price: 2311.4,
        as_of: Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn posts_markdown_message_to_chat() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{}/sendMessage", TELEGRAM_TOKEN)))
        .and(body_string_contains("chat_id=42"))
        .and(body_string_contains("parse_mode=Markdown"))
        .and(body_string_contains("Sell"))
        .and(body_string_contains("2311.40"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = TelegramNotifier::new(server.uri(), TELEGRAM_TOKEN, TELEGRAM_CHAT_ID);
    notifier.notify(&alert()).await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_rejected() {
    let server = MockServer::start().await;
    mock_telegram(&server, 403, 1).await;

    let notifier = TelegramNotifier::new(server.uri(), TELEGRAM_TOKEN, TELEGRAM_CHAT_ID);
    let err = notifier.notify(&alert()).await.unwrap_err();

    assert!(matches!(err, NotifyError::Rejected { status: 403, .. }));
}

#[tokio::test]
async fn log_notifier_accepts_every_alert() {
    let notifier = LogNotifier::new();
    for state in [TradingState::Buy, TradingState::Sell] {
        let event = AlertEvent { state, ..alert() };
        assert!(notifier.notify(&event).await.is_ok());
    }
}
