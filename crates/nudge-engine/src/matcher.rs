//! Due-set computation — a pure function over a snapshot of stored reminders.

use chrono::{DateTime, Datelike, Local, Timelike};

use nudge_core::Reminder;

/// Return the reminders that must fire at `now`, in snapshot order.
///
/// One-shot: not completed and `schedule_time` has arrived. Recurring: the
/// stored pattern equals the local calendar `(day, hour, minute)` of `now`
/// exactly — which is what bounds recurring fires to once per calendar
/// minute, provided the sweep runs at least once a minute. `schedule_time`
/// is never consulted for recurring entries.
pub fn due_set<'a>(reminders: &'a [Reminder], now: DateTime<Local>) -> Vec<&'a Reminder> {
    let now_ms = now.timestamp_millis();
    reminders
        .iter()
        .filter(|r| {
            if r.is_recurring {
                r.recurring_pattern.is_some_and(|p| {
                    p.day_of_month == now.day() && p.hour == now.hour() && p.minute == now.minute()
                })
            } else {
                !r.is_completed && r.schedule_time <= now_ms
            }
        })
        .collect()
}
