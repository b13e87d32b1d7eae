//! Sweep path: compute the due set, push each member, apply completion.

use chrono::{DateTime, Local};
use tracing::{info, warn};

use nudge_core::{ChatClient, Reminder};
use nudge_store::ReminderStore;

use crate::completion;
use crate::error::Result;
use crate::matcher;

/// Run one sweep cycle at reference time `now`. Returns the number of
/// reminders delivered.
///
/// A failure sending or completing one reminder is logged and the remaining
/// due reminders are still attempted. An unsent one-shot keeps
/// `is_completed = false` and is retried on the next cycle; a recurring miss
/// is only retried at the next occurrence of its pattern.
pub async fn run_sweep(
    store: &dyn ReminderStore,
    chat: &dyn ChatClient,
    now: DateTime<Local>,
) -> Result<usize> {
    let mut snapshot = store.due_one_shots(now.timestamp_millis())?;
    snapshot.extend(store.recurring_reminders()?);
    let due = matcher::due_set(&snapshot, now);

    let mut delivered = 0;
    for reminder in due {
        if let Err(e) = deliver(store, chat, reminder).await {
            warn!(id = %reminder.id, group = %reminder.group_id, error = %e, "reminder delivery failed");
            continue;
        }
        delivered += 1;
    }
    if delivered > 0 {
        info!(count = delivered, "sweep delivered reminders");
    }
    Ok(delivered)
}

async fn deliver(
    store: &dyn ReminderStore,
    chat: &dyn ChatClient,
    reminder: &Reminder,
) -> Result<()> {
    let kind = if reminder.is_recurring { "定期" } else { "" };
    let text = format!("⏰ {kind}リマインド: {}", reminder.message);
    chat.push_message(&reminder.group_id, &text).await?;
    completion::apply(store, reminder)
}
