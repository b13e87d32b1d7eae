use rusqlite::Connection;

use crate::error::Result;

/// Initialise the reminder schema in `conn`.
///
/// Creates the `reminders` table (idempotent) plus indexes backing the two
/// sweep scans: due one-shots filter on `(is_recurring, is_completed,
/// schedule_time)`, the list path filters on `group_id`.
pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS reminders (
            id            TEXT    NOT NULL PRIMARY KEY,
            group_id      TEXT    NOT NULL,
            message       TEXT    NOT NULL,
            schedule_time INTEGER NOT NULL,   -- epoch ms; placeholder for recurring
            created_by    TEXT    NOT NULL,
            is_completed  INTEGER NOT NULL DEFAULT 0,
            is_recurring  INTEGER NOT NULL DEFAULT 0,
            pattern       TEXT,               -- JSON RecurringPattern or NULL
            ttl           INTEGER NOT NULL    -- epoch seconds expiry hint
        ) STRICT;

        CREATE INDEX IF NOT EXISTS idx_reminders_due
            ON reminders (is_recurring, is_completed, schedule_time);
        CREATE INDEX IF NOT EXISTS idx_reminders_group
            ON reminders (group_id);
        ",
    )?;
    Ok(())
}
