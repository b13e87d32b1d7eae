use thiserror::Error;

use nudge_core::channel::ChatError;
use nudge_store::StoreError;

/// Errors surfaced by the engine's orchestration paths.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Chat delivery error: {0}")]
    Chat(String),
}

impl From<ChatError> for EngineError {
    fn from(e: ChatError) -> Self {
        EngineError::Chat(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
