//! Time-token resolution: turns the `<time>` token of a create command into
//! a concrete schedule.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, Local};
use regex::Regex;

use nudge_core::RecurringPattern;

static MONTHLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^毎月(\d{1,2})日(\d{1,2}):(\d{1,2})").unwrap());

/// A resolved schedule for a new reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSpec {
    /// Fire once at the given epoch-millisecond instant.
    Once { at_ms: i64 },
    /// Fire every month at the pattern's day/hour/minute.
    Monthly(RecurringPattern),
}

/// Resolve `token` against the grammars, monthly first.
///
/// Returns `None` for anything unresolvable — including a `分後` token with
/// no leading digits, and monthly patterns with out-of-range fields (the
/// calendar could never produce `31 < day`, and an out-of-range hour or
/// minute would never fire; such commands are dropped instead of stored).
pub fn resolve_time_token(token: &str, now: DateTime<Local>) -> Option<ScheduleSpec> {
    if let Some(caps) = MONTHLY_RE.captures(token) {
        // 1-2 digit captures always fit u32.
        let day_of_month: u32 = caps[1].parse().ok()?;
        let hour: u32 = caps[2].parse().ok()?;
        let minute: u32 = caps[3].parse().ok()?;
        if !(1..=31).contains(&day_of_month) || hour > 23 || minute > 59 {
            return None;
        }
        return Some(ScheduleSpec::Monthly(RecurringPattern {
            day_of_month,
            hour,
            minute,
        }));
    }

    if let Some(prefix) = token.strip_suffix("分後") {
        let digits: String = prefix.chars().take_while(|c| c.is_ascii_digit()).collect();
        let minutes: i64 = digits.parse().ok()?;
        let at = now + Duration::minutes(minutes);
        return Some(ScheduleSpec::Once {
            at_ms: at.timestamp_millis(),
        });
    }

    None
}
