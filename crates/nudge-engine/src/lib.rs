//! `nudge-engine` — reminder scheduling and matching.
//!
//! # Overview
//!
//! Two entry points drive everything:
//!
//! - [`handler::handle_event`] — the command path: parse `!remind …` text,
//!   resolve the time token, persist, reply.
//! - [`sweep::run_sweep`] — the sweep path: compute the due set for a
//!   reference instant, push each member, apply the completion transition.
//!
//! # Schedule grammars
//!
//! | Token            | Meaning                                   |
//! |------------------|-------------------------------------------|
//! | `<N>分後`        | One-shot, N minutes from now              |
//! | `毎月<D>日<H>:<M>` | Recurring, monthly at day/hour/minute   |
//!
//! Anything else is unresolved and the command is silently dropped.

pub mod command;
pub mod completion;
pub mod error;
pub mod handler;
pub mod matcher;
pub mod schedule;
pub mod sweep;

pub use command::Command;
pub use error::{EngineError, Result};
pub use schedule::ScheduleSpec;

#[cfg(test)]
pub(crate) mod testutil;
