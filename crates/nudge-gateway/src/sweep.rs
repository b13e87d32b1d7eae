//! Periodic sweep task: delivers due reminders and prunes expired rows.

use std::sync::Arc;

use chrono::Local;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::app::AppState;

/// Run the sweep loop until `shutdown` broadcasts `true`.
///
/// The interval comes from `sweep.interval_secs`. Recurring matching is
/// minute-granular, so intervals above 60 s break the at-most-once-per-minute
/// guarantee; the engine does not compensate.
pub async fn run(state: Arc<AppState>, mut shutdown: watch::Receiver<bool>) {
    let interval_secs = state.config.sweep.interval_secs;
    if interval_secs > 60 {
        warn!(
            interval_secs,
            "sweep interval exceeds one minute; recurring reminders may double-fire or be skipped"
        );
    }
    info!(interval_secs, "sweep task started");

    let mut interval = tokio::time::interval(std::time::Duration::from_secs(interval_secs));
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let now = Local::now();
                match nudge_engine::sweep::run_sweep(state.store.as_ref(), state.chat.as_ref(), now).await {
                    Ok(_) => {
                        if let Err(e) = state.store.prune_expired(now.timestamp()) {
                            warn!(error = %e, "ttl prune failed");
                        }
                    }
                    Err(e) => error!(error = %e, "sweep cycle failed"),
                }
            }
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    info!("sweep task shutting down");
                    break;
                }
            }
        }
    }
}
