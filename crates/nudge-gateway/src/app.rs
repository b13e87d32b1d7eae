use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use nudge_core::{ChatClient, NudgeConfig};
use nudge_store::ReminderStore;

/// Central shared state — passed as Arc<AppState> to all Axum handlers and
/// the sweep task.
pub struct AppState {
    pub config: NudgeConfig,
    pub store: Arc<dyn ReminderStore>,
    pub chat: Arc<dyn ChatClient>,
}

impl AppState {
    pub fn new(
        config: NudgeConfig,
        store: Arc<dyn ReminderStore>,
        chat: Arc<dyn ChatClient>,
    ) -> Self {
        Self {
            config,
            store,
            chat,
        }
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(crate::http::health::health_handler))
        .route("/webhook", post(crate::http::webhook::webhook_handler))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
