//! Webhook ingress endpoint — POST /webhook.
//!
//! Accepts LINE webhook batches. The signature is verified over the raw body
//! before any parsing; a rejected signature fails the whole request with 403.
//! After that, events are processed independently: one failing event is
//! logged and the rest of the batch still runs, and the response is 200.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::Local;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use nudge_engine::handler::{handle_event, InboundEvent};
use nudge_line::{events::WebhookEvent, signature::validate_signature};

use crate::app::AppState;

/// POST /webhook
pub async fn webhook_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let signature = headers
        .get("x-line-signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !validate_signature(&state.config.line.channel_secret, &body, signature) {
        warn!("webhook rejected: invalid signature");
        return Err((
            StatusCode::FORBIDDEN,
            Json(json!({"error": "invalid signature"})),
        ));
    }

    let payload: nudge_line::WebhookPayload = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "invalid JSON in webhook body");
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "invalid JSON body"})),
        )
    })?;

    debug!(events = payload.events.len(), "webhook batch accepted");

    for event in &payload.events {
        if let Err(e) = process_event(&state, event).await {
            warn!(error = %e, "webhook event processing failed");
        }
    }

    Ok(Json(json!({"ok": true})))
}

async fn process_event(state: &AppState, event: &WebhookEvent) -> anyhow::Result<()> {
    let Some(text) = event.text() else {
        return Ok(()); // non-text events carry no commands
    };
    let Some(conversation_id) = event.source.conversation_id() else {
        return Ok(());
    };
    let Some(reply_token) = event.reply_token.as_deref() else {
        return Ok(());
    };

    let inbound = InboundEvent {
        group_id: conversation_id.to_string(),
        user_id: event.source.user_id.clone().unwrap_or_default(),
        reply_token: reply_token.to_string(),
        text: text.to_string(),
    };
    handle_event(
        state.store.as_ref(),
        state.chat.as_ref(),
        &inbound,
        Local::now(),
    )
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
    use hmac::{Hmac, Mac};
    use sha2::Sha256;
    use std::sync::Mutex;

    use nudge_core::channel::{ChatClient, ChatError};
    use nudge_core::config::{DatabaseConfig, LineConfig, NudgeConfig, ServerConfig, SweepConfig};
    use nudge_store::SqliteStore;

    const SECRET: &str = "test-channel-secret";

    #[derive(Default)]
    struct RecordingChat {
        replies: Mutex<Vec<(String, String)>>,
        fail_reply_to: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ChatClient for RecordingChat {
        async fn push_message(&self, _to: &str, _text: &str) -> Result<(), ChatError> {
            Ok(())
        }

        async fn reply_message(&self, reply_token: &str, text: &str) -> Result<(), ChatError> {
            if self.fail_reply_to.lock().unwrap().iter().any(|t| t == reply_token) {
                return Err("reply rejected".into());
            }
            self.replies
                .lock()
                .unwrap()
                .push((reply_token.to_string(), text.to_string()));
            Ok(())
        }
    }

    fn state() -> (Arc<AppState>, Arc<RecordingChat>) {
        let config = NudgeConfig {
            server: ServerConfig::default(),
            line: LineConfig {
                channel_secret: SECRET.to_string(),
                channel_access_token: "token".to_string(),
            },
            database: DatabaseConfig::default(),
            sweep: SweepConfig::default(),
        };
        let store = Arc::new(SqliteStore::new(rusqlite::Connection::open_in_memory().unwrap()).unwrap());
        let chat = Arc::new(RecordingChat::default());
        let chat_dyn: Arc<dyn ChatClient> = chat.clone();
        (Arc::new(AppState::new(config, store, chat_dyn)), chat)
    }

    fn sign(body: &[u8]) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(SECRET.as_bytes()).unwrap();
        mac.update(body);
        BASE64.encode(mac.finalize().into_bytes())
    }

    fn signed_headers(body: &[u8]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-line-signature", sign(body).parse().unwrap());
        headers
    }

    #[tokio::test]
    async fn rejects_missing_or_bad_signature() {
        let (state, _) = state();
        let body = Bytes::from_static(br#"{"events":[]}"#);

        let err = webhook_handler(State(Arc::clone(&state)), HeaderMap::new(), body.clone())
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::FORBIDDEN);

        let mut headers = HeaderMap::new();
        headers.insert("x-line-signature", "AAAA".parse().unwrap());
        let err = webhook_handler(State(state), headers, body).await.unwrap_err();
        assert_eq!(err.0, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn rejects_invalid_json_after_signature() {
        let (state, _) = state();
        let body = Bytes::from_static(b"not json");
        let headers = signed_headers(&body);

        let err = webhook_handler(State(state), headers, body).await.unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn routes_command_event_through_engine() {
        let (state, chat) = state();
        let body = Bytes::from_static(
            br#"{
                "events": [{
                    "type": "message",
                    "replyToken": "tok1",
                    "source": {"type": "group", "groupId": "G1", "userId": "U1"},
                    "message": {"type": "text", "text": "!remind list"}
                }]
            }"#,
        );
        let headers = signed_headers(&body);

        let response = webhook_handler(State(Arc::clone(&state)), headers, body)
            .await
            .unwrap();
        assert_eq!(response.0, json!({"ok": true}));

        let replies = chat.replies.lock().unwrap().clone();
        assert_eq!(replies, vec![("tok1".to_string(), "リマインドはありません".to_string())]);
    }

    #[tokio::test]
    async fn ignores_non_text_events_in_batch() {
        let (state, chat) = state();
        let body = Bytes::from_static(
            br#"{
                "events": [
                    {"type": "join", "source": {"type": "group", "groupId": "G1"}},
                    {
                        "type": "message",
                        "replyToken": "tok2",
                        "source": {"type": "group", "groupId": "G1", "userId": "U1"},
                        "message": {"type": "text", "text": "!remind delete 42"}
                    }
                ]
            }"#,
        );
        let headers = signed_headers(&body);

        let response = webhook_handler(State(state), headers, body).await.unwrap();
        assert_eq!(response.0, json!({"ok": true}));

        let replies = chat.replies.lock().unwrap().clone();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].1, "ID: 42 のリマインドを削除しました");
    }

    #[tokio::test]
    async fn failing_event_does_not_block_rest_of_batch() {
        let (state, chat) = state();
        chat.fail_reply_to.lock().unwrap().push("tok-bad".to_string());
        let body = Bytes::from_static(
            br#"{
                "events": [
                    {
                        "type": "message",
                        "replyToken": "tok-bad",
                        "source": {"type": "group", "groupId": "G1", "userId": "U1"},
                        "message": {"type": "text", "text": "!remind list"}
                    },
                    {
                        "type": "message",
                        "replyToken": "tok-ok",
                        "source": {"type": "group", "groupId": "G1", "userId": "U1"},
                        "message": {"type": "text", "text": "!remind delete 42"}
                    }
                ]
            }"#,
        );
        let headers = signed_headers(&body);

        // The first event's reply is rejected; the batch still succeeds and
        // the second event is processed.
        let response = webhook_handler(State(state), headers, body).await.unwrap();
        assert_eq!(response.0, json!({"ok": true}));

        let replies = chat.replies.lock().unwrap().clone();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].0, "tok-ok");
        assert_eq!(replies[0].1, "ID: 42 のリマインドを削除しました");
    }
}

