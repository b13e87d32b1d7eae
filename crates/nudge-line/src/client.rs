//! Reqwest client for the LINE Messaging API push/reply endpoints.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use nudge_core::channel::{ChatClient, ChatError};

use crate::error::LineError;

const API_BASE: &str = "https://api.line.me/v2/bot";

/// LINE Messaging API client. Stateless per call: one shared reqwest client,
/// bearer auth via the channel access token.
pub struct LineClient {
    http: reqwest::Client,
    access_token: String,
}

impl LineClient {
    pub fn new(access_token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_token: access_token.to_string(),
        }
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<(), LineError> {
        let response = self
            .http
            .post(format!("{API_BASE}{path}"))
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LineError::Api {
                status: status.as_u16(),
                body,
            });
        }
        debug!(%path, "LINE API call ok");
        Ok(())
    }

    fn text_message(text: &str) -> serde_json::Value {
        json!([{ "type": "text", "text": text }])
    }
}

#[async_trait]
impl ChatClient for LineClient {
    /// Unsolicited delivery to a conversation — the sweep path.
    async fn push_message(&self, to: &str, text: &str) -> Result<(), ChatError> {
        self.post(
            "/message/push",
            json!({ "to": to, "messages": Self::text_message(text) }),
        )
        .await?;
        Ok(())
    }

    /// Correlated reply to an inbound event — the command path.
    async fn reply_message(&self, reply_token: &str, text: &str) -> Result<(), ChatError> {
        self.post(
            "/message/reply",
            json!({ "replyToken": reply_token, "messages": Self::text_message(text) }),
        )
        .await?;
        Ok(())
    }
}
