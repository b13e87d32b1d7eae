use thiserror::Error;

/// Errors produced by the LINE adapter.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("LINE API returned {status}: {body}")]
    Api { status: u16, body: String },
}
