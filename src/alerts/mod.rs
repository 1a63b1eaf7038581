//! Transition-edge alerting and notifier collaborators.

pub mod dispatcher;
pub mod message;
pub mod notifier;

pub use dispatcher::{should_fire, AlertDispatcher, CycleOutcome, Delivery, Evaluation, FiredAlert};
pub use message::format_alert;
pub use notifier::{LogNotifier, Notifier, NotifyError, TelegramNotifier};
