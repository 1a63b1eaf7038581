//! Outbound alert delivery.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::alerts::message::{format_alert, DEFAULT_ALERT_TITLE};
use crate::models::signal::AlertEvent;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notifier transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("notifier rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Delivers an alert to a human. Failures are reported, never retried here.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, alert: &AlertEvent) -> Result<(), NotifyError>;
}

#[async_trait]
impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    async fn notify(&self, alert: &AlertEvent) -> Result<(), NotifyError> {
        (**self).notify(alert).await
    }
}

/// Sends alerts through the Telegram Bot API `sendMessage` method.
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_url: String,
    token: String,
    chat_id: String,
    title: String,
}

impl TelegramNotifier {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(client, api_url, token, chat_id)
    }

    pub fn with_client(
        client: reqwest::Client,
        api_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
            title: DEFAULT_ALERT_TITLE.to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, alert: &AlertEvent) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        let text = format_alert(&self.title, alert);
        let form = [
            ("chat_id", self.chat_id.as_str()),
            ("text", text.as_str()),
            ("parse_mode", "Markdown"),
        ];

        let response = self.client.post(&url).form(&form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Writes alerts to the log only; used when no messaging channel is configured.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    title: String,
}

impl LogNotifier {
    pub fn new() -> Self {
        Self {
            title: DEFAULT_ALERT_TITLE.to_string(),
        }
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, alert: &AlertEvent) -> Result<(), NotifyError> {
        info!(
            state = %alert.state,
            price = alert.price,
            as_of = %alert.as_of,
            "{}",
            format_alert(&self.title, alert)
        );
        Ok(())
    }
}
