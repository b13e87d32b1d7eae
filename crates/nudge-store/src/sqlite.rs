use std::sync::Mutex;

use rusqlite::{Connection, Row};
use tracing::debug;

use nudge_core::{Reminder, RecurringPattern};

use crate::db::init_db;
use crate::error::Result;
use crate::store::ReminderStore;

const COLUMNS: &str =
    "id, group_id, message, schedule_time, created_by, is_completed, is_recurring, pattern, ttl";

/// SQLite-backed reminder store.
///
/// Thread-safe: wraps the connection in a Mutex. Per-id updates and deletes
/// are atomic at the SQLite layer, which is all the concurrency control the
/// service requires.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Wrap `conn`, initialising the schema if needed.
    pub fn new(conn: Connection) -> Result<Self> {
        init_db(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn query(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<Reminder>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(sql)?;
        let rows = stmt
            .query_map(params, row_to_reminder)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

fn row_to_reminder(row: &Row<'_>) -> rusqlite::Result<Reminder> {
    let pattern_json: Option<String> = row.get(7)?;
    // A row flagged recurring with an undecodable pattern is skipped by the
    // matcher anyway, so decode failures degrade to None rather than abort
    // the whole scan.
    let recurring_pattern: Option<RecurringPattern> = pattern_json
        .as_deref()
        .and_then(|json| serde_json::from_str(json).ok());
    Ok(Reminder {
        id: row.get(0)?,
        group_id: row.get(1)?,
        message: row.get(2)?,
        schedule_time: row.get(3)?,
        created_by: row.get(4)?,
        is_completed: row.get(5)?,
        is_recurring: row.get(6)?,
        recurring_pattern,
        ttl: row.get(8)?,
    })
}

impl ReminderStore for SqliteStore {
    fn put(&self, reminder: &Reminder) -> Result<()> {
        let pattern_json = reminder
            .recurring_pattern
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO reminders
             (id, group_id, message, schedule_time, created_by,
              is_completed, is_recurring, pattern, ttl)
             VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9)",
            rusqlite::params![
                reminder.id,
                reminder.group_id,
                reminder.message,
                reminder.schedule_time,
                reminder.created_by,
                reminder.is_completed,
                reminder.is_recurring,
                pattern_json,
                reminder.ttl,
            ],
        )?;
        debug!(id = %reminder.id, group = %reminder.group_id, "reminder stored");
        Ok(())
    }

    fn due_one_shots(&self, now_ms: i64) -> Result<Vec<Reminder>> {
        self.query(
            &format!(
                "SELECT {COLUMNS} FROM reminders
                 WHERE is_recurring = 0 AND is_completed = 0 AND schedule_time <= ?1
                 ORDER BY rowid"
            ),
            rusqlite::params![now_ms],
        )
    }

    fn recurring_reminders(&self) -> Result<Vec<Reminder>> {
        self.query(
            &format!("SELECT {COLUMNS} FROM reminders WHERE is_recurring = 1 ORDER BY rowid"),
            rusqlite::params![],
        )
    }

    fn group_reminders(&self, group_id: &str) -> Result<Vec<Reminder>> {
        self.query(
            &format!(
                "SELECT {COLUMNS} FROM reminders
                 WHERE group_id = ?1 AND (is_completed = 0 OR is_recurring = 1)
                 ORDER BY rowid"
            ),
            rusqlite::params![group_id],
        )
    }

    fn mark_completed(&self, id: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("UPDATE reminders SET is_completed = 1 WHERE id = ?1", [id])?;
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM reminders WHERE id = ?1", [id])?;
        Ok(())
    }

    fn prune_expired(&self, now_secs: i64) -> Result<usize> {
        let conn = self.conn.lock().unwrap();
        let n = conn.execute(
            "DELETE FROM reminders
             WHERE is_recurring = 0 AND is_completed = 1 AND ttl < ?1",
            [now_secs],
        )?;
        if n > 0 {
            debug!(count = n, "expired reminders pruned");
        }
        Ok(n)
    }
}
