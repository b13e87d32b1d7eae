//! Post-delivery state transition for a fired reminder.

use nudge_core::Reminder;
use nudge_store::ReminderStore;

use crate::error::Result;

/// What the store must do after a reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionAction {
    /// One-shot: set `is_completed` so it never fires again.
    MarkCompleted,
    /// Recurring: leave the row untouched; it stays eligible for the next
    /// occurrence of its pattern.
    LeaveUntouched,
}

pub fn resolve(reminder: &Reminder) -> CompletionAction {
    if reminder.is_recurring {
        CompletionAction::LeaveUntouched
    } else {
        CompletionAction::MarkCompleted
    }
}

/// Apply the transition for a fired reminder.
pub fn apply(store: &dyn ReminderStore, reminder: &Reminder) -> Result<()> {
    match resolve(reminder) {
        CompletionAction::MarkCompleted => store.mark_completed(&reminder.id)?,
        CompletionAction::LeaveUntouched => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nudge_core::RecurringPattern;
    use nudge_store::SqliteStore;

    #[test]
    fn one_shot_resolves_to_mark_completed() {
        let r = Reminder::one_shot("G1", "U1", "x", 0);
        assert_eq!(resolve(&r), CompletionAction::MarkCompleted);
    }

    #[test]
    fn recurring_resolves_to_no_op() {
        let r = Reminder::recurring(
            "G1",
            "U1",
            "x",
            RecurringPattern {
                day_of_month: 1,
                hour: 0,
                minute: 0,
            },
            0,
        );
        assert_eq!(resolve(&r), CompletionAction::LeaveUntouched);
    }

    #[test]
    fn apply_completes_one_shot_in_store() {
        let store = SqliteStore::new(rusqlite::Connection::open_in_memory().unwrap()).unwrap();
        let r = Reminder::one_shot("G1", "U1", "x", 0);
        store.put(&r).unwrap();

        apply(&store, &r).unwrap();
        assert!(store.due_one_shots(i64::MAX).unwrap().is_empty());
    }

    #[test]
    fn apply_leaves_recurring_untouched() {
        let store = SqliteStore::new(rusqlite::Connection::open_in_memory().unwrap()).unwrap();
        let r = Reminder::recurring(
            "G1",
            "U1",
            "x",
            RecurringPattern {
                day_of_month: 1,
                hour: 0,
                minute: 0,
            },
            0,
        );
        store.put(&r).unwrap();

        apply(&store, &r).unwrap();
        let stored = store.recurring_reminders().unwrap();
        assert_eq!(stored.len(), 1);
        assert!(!stored[0].is_completed);
    }
}
