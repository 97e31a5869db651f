use chrono::{Local, NaiveDate, TimeZone};
use rusqlite::{params, Connection, Result};

/// One immutable classified journal record. Entries are never updated
/// or individually deleted; the only deletion is [`Entry::delete_all`].
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: Option<i64>,
    pub text: String,
    pub emotion: String,
    /// Stress score copied from the emotion's configured constant at
    /// classification time. Never recomputed from later configuration.
    pub stress: i32,
    /// Unix seconds, wall clock at record time.
    pub timestamp: i64,
}

impl Entry {
    pub fn new(text: &str, emotion: &str, stress: i32, timestamp: i64) -> Self {
        Self {
            id: None,
            text: text.to_string(),
            emotion: emotion.to_string(),
            stress,
            timestamp,
        }
    }

    /// Append this entry. The store does not validate emotion or
    /// stress against the configuration; whatever is passed is
    /// persisted.
    pub fn save(&mut self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO entries (text, emotion, stress, timestamp) VALUES (?1, ?2, ?3, ?4)",
            params![self.text, self.emotion, self.stress, self.timestamp],
        )?;
        self.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    /// Up to `limit` most recent entries, newest first. Equal
    /// timestamps fall back to insertion order, newest id first.
    pub fn find_recent(conn: &Connection, limit: usize) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, text, emotion, stress, timestamp FROM entries
             ORDER BY timestamp DESC, id DESC LIMIT ?1",
        )?;

        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(Self {
                id: Some(row.get(0)?),
                text: row.get(1)?,
                emotion: row.get(2)?,
                stress: row.get(3)?,
                timestamp: row.get(4)?,
            })
        })?;

        rows.collect()
    }

    /// All entries whose timestamp falls on `date` in the local
    /// timezone, in insertion order.
    pub fn find_on_day(conn: &Connection, date: NaiveDate) -> Result<Vec<Self>> {
        let Some((start, end)) = local_day_bounds(date) else {
            return Ok(Vec::new());
        };

        let mut stmt = conn.prepare(
            "SELECT id, text, emotion, stress, timestamp FROM entries
             WHERE timestamp >= ?1 AND timestamp < ?2 ORDER BY id",
        )?;

        let rows = stmt.query_map(params![start, end], |row| {
            Ok(Self {
                id: Some(row.get(0)?),
                text: row.get(1)?,
                emotion: row.get(2)?,
                stress: row.get(3)?,
                timestamp: row.get(4)?,
            })
        })?;

        rows.collect()
    }

    /// Entry count per emotion label. Labels with no entries are
    /// absent from the result.
    pub fn counts_by_emotion(conn: &Connection) -> Result<Vec<(String, i64)>> {
        let mut stmt = conn.prepare("SELECT emotion, COUNT(*) FROM entries GROUP BY emotion")?;

        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

        rows.collect()
    }

    /// Erase every entry. Returns the number of deleted rows.
    pub fn delete_all(conn: &Connection) -> Result<usize> {
        conn.execute("DELETE FROM entries", [])
    }
}

/// Unix-second bounds `[start, end)` of `date` in the local timezone.
/// `None` only for dates outside the representable range.
fn local_day_bounds(date: NaiveDate) -> Option<(i64, i64)> {
    let start = Local
        .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
        .earliest()?;
    let end = Local
        .from_local_datetime(&date.succ_opt()?.and_hms_opt(0, 0, 0)?)
        .earliest()?;
    Some((start.timestamp(), end.timestamp()))
}
