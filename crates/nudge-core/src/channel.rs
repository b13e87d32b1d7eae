//! Outbound chat seam — implemented by the LINE adapter, faked in engine tests.

use async_trait::async_trait;

/// Errors surfaced by a chat transport. Boxed so the trait stays
/// transport-agnostic; callers only log and move on.
pub type ChatError = Box<dyn std::error::Error + Send + Sync>;

/// Outbound messaging operations the engine needs.
///
/// `push_message` is unsolicited delivery (the sweep path); `reply_message`
/// answers a specific inbound event via its reply token (the command path).
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn push_message(&self, to: &str, text: &str) -> Result<(), ChatError>;

    async fn reply_message(&self, reply_token: &str, text: &str) -> Result<(), ChatError>;
}
