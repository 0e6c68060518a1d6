use rusqlite::Connection;

use crate::errors::AppResult;

/// Create the schema: the sample feed, the per-day summary rows that feed
/// allocation, and the append-only segments sink.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS samples (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            vehicle_id TEXT NOT NULL,
            timestamp  TEXT NOT NULL,
            speed      REAL NOT NULL,
            lat        REAL NOT NULL,
            lon        REAL NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_samples_vehicle_ts
            ON samples(vehicle_id, timestamp);

        CREATE TABLE IF NOT EXISTS daily_summary (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            vehicle_id     TEXT NOT NULL,
            date           TEXT NOT NULL,
            lunch_duration TEXT NOT NULL DEFAULT '01:00:00',
            waiting_budget TEXT NOT NULL DEFAULT '00:00:00',
            UNIQUE(vehicle_id, date)
        );

        CREATE TABLE IF NOT EXISTS segments (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            vehicle_id    TEXT NOT NULL,
            date          TEXT NOT NULL,
            label         TEXT NOT NULL CHECK(label IN ('WAITING','REST','LUNCH')),
            start_ts      TEXT NOT NULL,
            end_ts        TEXT NOT NULL,
            duration_secs INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_segments_vehicle_date
            ON segments(vehicle_id, date);
        "#,
    )?;
    Ok(())
}
