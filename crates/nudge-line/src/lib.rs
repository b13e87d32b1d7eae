//! `nudge-line` — LINE Messaging API collaborator.
//!
//! Thin I/O plumbing around the platform: the reqwest-backed
//! [`client::LineClient`] (implements the core `ChatClient` seam), webhook
//! payload types, and `x-line-signature` verification.

pub mod client;
pub mod error;
pub mod events;
pub mod signature;

pub use client::LineClient;
pub use error::LineError;
pub use events::{EventSource, MessageContent, WebhookEvent, WebhookPayload};
pub use signature::validate_signature;
