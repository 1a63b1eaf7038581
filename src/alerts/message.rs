//! Human-readable alert text.

use crate::models::signal::AlertEvent;

pub const DEFAULT_ALERT_TITLE: &str = "Gold Trading Alert";

/// Render an alert as Telegram Markdown.
pub fn format_alert(title: &str, alert: &AlertEvent) -> String {
    format!(
        "🟡 *{}*\n\n*Signal*: {}\n*Price*: ${:.2}\n*Time*: {}",
        title,
        alert.state,
        alert.price,
        alert.as_of.format("%Y-%m-%d %H:%M")
    )
}
