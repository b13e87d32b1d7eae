//! `nudge-core` — shared types, configuration and trait seams.
//!
//! Everything the other crates agree on lives here: the persisted
//! [`types::Reminder`] model, the [`channel::ChatClient`] seam implemented by
//! the LINE adapter, and the figment-backed [`config::NudgeConfig`].

pub mod channel;
pub mod config;
pub mod error;
pub mod types;

pub use channel::ChatClient;
pub use config::NudgeConfig;
pub use error::ConfigError;
pub use types::{Reminder, RecurringPattern};
