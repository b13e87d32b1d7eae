//! `nudge-store` — reminder persistence.
//!
//! The engine talks to the [`store::ReminderStore`] trait; the production
//! implementation is [`sqlite::SqliteStore`]. The three read methods mirror
//! the three filtered scans the sweep and list paths need, so the engine's
//! due-set matcher stays a pure function over the returned snapshot.

pub mod db;
pub mod error;
pub mod sqlite;
pub mod store;

pub use error::{Result, StoreError};
pub use sqlite::SqliteStore;
pub use store::ReminderStore;
