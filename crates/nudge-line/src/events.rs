//! Webhook payload types — only the fields the command path consumes.

use serde::Deserialize;

/// Top-level webhook delivery: a batch of events.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// A single webhook event. Non-message events (joins, follows, …) still
/// deserialize; `message` is simply absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub reply_token: Option<String>,
    pub source: EventSource,
    #[serde(default)]
    pub message: Option<MessageContent>,
}

/// Where the event originated. Group chats carry `group_id`; 1:1 chats only
/// `user_id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl EventSource {
    /// Conversation id for replies and reminder ownership: the group when
    /// present, otherwise the user (1:1 chat).
    pub fn conversation_id(&self) -> Option<&str> {
        self.group_id.as_deref().or(self.user_id.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageContent {
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl WebhookEvent {
    /// The command text, if this is a text-message event.
    pub fn text(&self) -> Option<&str> {
        if self.event_type != "message" {
            return None;
        }
        let message = self.message.as_ref()?;
        if message.message_type != "text" {
            return None;
        }
        message.text.as_deref()
    }
}
