//! Goldwatch Worker
//!
//! Fetches the price series on a schedule, classifies the latest bar and
//! alerts when the trading state flips to Buy or Sell.

use dotenvy::dotenv;
use goldwatch::alerts::dispatcher::AlertDispatcher;
use goldwatch::alerts::notifier::{LogNotifier, Notifier, TelegramNotifier};
use goldwatch::config::Config;
use goldwatch::core::runtime::{RuntimeConfig, SignalRuntime};
use goldwatch::core::scheduler::CycleScheduler;
use goldwatch::logging;
use goldwatch::metrics::Metrics;
use goldwatch::services::twelvedata::TwelveDataProvider;
use goldwatch::signals::engine::SignalEngine;
use goldwatch::state::FileSignalStore;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env()?;
    let env = goldwatch::config::get_environment();
    info!("Starting Goldwatch Worker");
    info!(environment = %env, symbol = %config.symbol, interval = %config.interval, "Environment");

    let provider =
        TwelveDataProvider::with_base_url(&config.twelve_data_base_url, config.require_api_key()?);

    let notifier: Arc<dyn Notifier> = match &config.telegram {
        Some(telegram) => {
            info!("Alerts will be sent to Telegram");
            Arc::new(TelegramNotifier::new(
                &telegram.api_url,
                &telegram.bot_token,
                &telegram.chat_id,
            ))
        }
        None => {
            warn!("TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID not set, alerts will only be logged");
            Arc::new(LogNotifier::new())
        }
    };

    let store = FileSignalStore::new(&config.signal_state_path);
    info!(path = %store.path().display(), "Signal state file");

    let engine = SignalEngine::new(config.indicators)?;
    let dispatcher = AlertDispatcher::new(engine, store, notifier);
    let metrics = Arc::new(Metrics::new()?);
    let runtime = SignalRuntime::new(RuntimeConfig::from(&config), provider, dispatcher)
        .with_metrics(metrics);

    // reject an unusable interval before doing any work
    let scheduler = match config.eval_interval_seconds {
        0 => None,
        interval => Some(CycleScheduler::new(interval)?),
    };

    // first cycle runs immediately; a store failure is fatal here
    runtime.run_cycle().await?;

    let Some(scheduler) = scheduler else {
        info!("EVAL_INTERVAL_SECONDS is 0, single cycle complete");
        return Ok(());
    };

    info!(
        interval = config.eval_interval_seconds,
        "Signal Evaluation: every {} seconds", config.eval_interval_seconds
    );

    let runtime = &runtime;
    scheduler
        .run(
            move || async move {
                // errors are logged by the runtime; the next tick tries again
                let _ = runtime.run_cycle().await;
            },
            async {
                let _ = tokio::signal::ctrl_c().await;
                info!("Shutting down worker...");
            },
        )
        .await;

    info!("Worker stopped");
    Ok(())
}
