//! Command path: parse an inbound text event, mutate the store, reply.

use chrono::{DateTime, Local, TimeZone};
use tracing::{debug, info};

use nudge_core::{ChatClient, Reminder};
use nudge_store::ReminderStore;

use crate::command::{self, Command};
use crate::error::Result;
use crate::schedule::{resolve_time_token, ScheduleSpec};

pub const EMPTY_LIST_REPLY: &str = "リマインドはありません";

/// An inbound text event, already unwrapped from the transport envelope.
#[derive(Debug, Clone)]
pub struct InboundEvent {
    /// Conversation the event came from (group id, or user id in 1:1 chats).
    pub group_id: String,
    /// Authoring user.
    pub user_id: String,
    /// Token for the correlated reply.
    pub reply_token: String,
    /// Raw message text.
    pub text: String,
}

/// Handle one inbound text event at reference time `now`.
///
/// Unrecognised commands and unresolvable time tokens are silently dropped —
/// the absence of a reply is the only feedback for malformed input.
pub async fn handle_event(
    store: &dyn ReminderStore,
    chat: &dyn ChatClient,
    event: &InboundEvent,
    now: DateTime<Local>,
) -> Result<()> {
    match command::parse(&event.text) {
        Command::List => {
            let reminders = store.group_reminders(&event.group_id)?;
            let reply = render_list(&reminders);
            chat.reply_message(&event.reply_token, &reply).await?;
        }
        Command::Delete { id } => {
            // No existence check: deleting an unknown id still confirms.
            store.delete(&id)?;
            info!(%id, group = %event.group_id, "reminder deleted");
            chat.reply_message(&event.reply_token, &format!("ID: {id} のリマインドを削除しました"))
                .await?;
        }
        Command::Create {
            time_token,
            message,
        } => {
            create_reminder(store, chat, event, &time_token, &message, now).await?;
        }
        Command::None => {}
    }
    Ok(())
}

async fn create_reminder(
    store: &dyn ReminderStore,
    chat: &dyn ChatClient,
    event: &InboundEvent,
    time_token: &str,
    message: &str,
    now: DateTime<Local>,
) -> Result<()> {
    let Some(spec) = resolve_time_token(time_token, now) else {
        debug!(token = %time_token, "unresolvable time token, dropping command");
        return Ok(());
    };

    let reply = match spec {
        ScheduleSpec::Once { at_ms } => {
            let reminder = Reminder::one_shot(&event.group_id, &event.user_id, message, at_ms);
            store.put(&reminder)?;
            info!(id = %reminder.id, group = %event.group_id, at_ms, "one-shot reminder created");
            format!("{time_token}にリマインドを設定しました: {message}")
        }
        ScheduleSpec::Monthly(pattern) => {
            let reminder = Reminder::recurring(
                &event.group_id,
                &event.user_id,
                message,
                pattern,
                now.timestamp_millis(),
            );
            store.put(&reminder)?;
            info!(id = %reminder.id, group = %event.group_id, %pattern, "recurring reminder created");
            format!("{pattern}にリマインドを設定しました: {message}")
        }
    };
    chat.reply_message(&event.reply_token, &reply).await?;
    Ok(())
}

/// Render a group's reminders one per line, in store order.
fn render_list(reminders: &[Reminder]) -> String {
    if reminders.is_empty() {
        return EMPTY_LIST_REPLY.to_string();
    }
    reminders
        .iter()
        .map(|r| match r.recurring_pattern {
            Some(pattern) if r.is_recurring => {
                format!("ID: {} ({}) {}", r.id, pattern, r.message)
            }
            _ => format!("ID: {} ({}) {}", r.id, render_local_time(r.schedule_time), r.message),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_local_time(epoch_ms: i64) -> String {
    match Local.timestamp_millis_opt(epoch_ms).single() {
        Some(dt) => dt.format("%Y/%m/%d %H:%M").to_string(),
        None => epoch_ms.to_string(),
    }
}
