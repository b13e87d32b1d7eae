use nudge_core::Reminder;

use crate::error::Result;

/// Persistence operations the engine consumes.
///
/// The read methods return snapshots in insertion order; due-ness decisions
/// stay in the engine's matcher. `mark_completed` and `delete` are keyed by
/// id and succeed silently when the row does not exist, matching the
/// accept-uncritically delete semantics of the command grammar.
pub trait ReminderStore: Send + Sync {
    /// Insert a new reminder.
    fn put(&self, reminder: &Reminder) -> Result<()>;

    /// One-shot reminders with `schedule_time <= now_ms` not yet completed.
    fn due_one_shots(&self, now_ms: i64) -> Result<Vec<Reminder>>;

    /// All recurring reminders. Pattern matching against the current minute
    /// happens in the engine.
    fn recurring_reminders(&self) -> Result<Vec<Reminder>>;

    /// A group's visible reminders: incomplete one-shots plus all recurring.
    fn group_reminders(&self, group_id: &str) -> Result<Vec<Reminder>>;

    /// Set `is_completed` on a one-shot after delivery.
    fn mark_completed(&self, id: &str) -> Result<()>;

    /// Remove a reminder by id. Deleting an unknown id is not an error.
    fn delete(&self, id: &str) -> Result<()>;

    /// Drop completed one-shot rows whose `ttl` (epoch seconds) has passed.
    /// Returns the number of pruned rows.
    fn prune_expired(&self, now_secs: i64) -> Result<usize>;
}
