use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Seconds a fired one-shot row stays around before the store may prune it.
pub const TTL_GRACE_SECS: i64 = 86_400;

/// Monthly firing pattern — the reminder fires when the local calendar
/// `(day, hour, minute)` of the sweep instant equals these fields exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringPattern {
    /// Day of month, 1–31. A day that a given month lacks simply never matches.
    pub day_of_month: u32,
    /// Hour, 0–23.
    pub hour: u32,
    /// Minute, 0–59.
    pub minute: u32,
}

impl std::fmt::Display for RecurringPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "毎月{}日{}:{}", self.day_of_month, self.hour, self.minute)
    }
}

/// A persisted reminder record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    /// UUID v4 string — primary key, immutable, sole deletion key.
    pub id: String,
    /// LINE group (or 1:1 chat) the reminder belongs to and is delivered to.
    pub group_id: String,
    /// Free-text payload pushed when the reminder fires.
    pub message: String,
    /// Epoch-millisecond fire time. For recurring reminders this is only a
    /// placeholder (creation time); `recurring_pattern` governs firing.
    pub schedule_time: i64,
    /// LINE user id of the author.
    pub created_by: String,
    /// True only for one-shot reminders that have fired.
    pub is_completed: bool,
    /// Marks a recurring reminder. False means one-shot.
    pub is_recurring: bool,
    /// Present iff `is_recurring`.
    pub recurring_pattern: Option<RecurringPattern>,
    /// Storage expiry hint in epoch seconds. Never consulted for due-ness.
    pub ttl: i64,
}

impl Reminder {
    /// Build a one-shot reminder firing at `at_ms`.
    pub fn one_shot(group_id: &str, created_by: &str, message: &str, at_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            group_id: group_id.to_string(),
            message: message.to_string(),
            schedule_time: at_ms,
            created_by: created_by.to_string(),
            is_completed: false,
            is_recurring: false,
            recurring_pattern: None,
            ttl: at_ms / 1000 + TTL_GRACE_SECS,
        }
    }

    /// Build a monthly recurring reminder. `now_ms` is stored as the
    /// placeholder `schedule_time`.
    pub fn recurring(
        group_id: &str,
        created_by: &str,
        message: &str,
        pattern: RecurringPattern,
        now_ms: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            group_id: group_id.to_string(),
            message: message.to_string(),
            schedule_time: now_ms,
            created_by: created_by.to_string(),
            is_completed: false,
            is_recurring: true,
            recurring_pattern: Some(pattern),
            ttl: now_ms / 1000 + TTL_GRACE_SECS,
        }
    }
}
