use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

use crate::errors::{AppError, AppResult};
use crate::models::allocated_segment::AllocatedSegment;
use crate::models::daily_reference::DailyReference;
use crate::models::sample::Sample;
use crate::models::segment_label::SegmentLabel;
use crate::utils::time::{format_datetime, parse_datetime, parse_hms_duration};

/// Samples for one vehicle-day, sorted by timestamp ascending — the
/// ordering the segmenter requires.
pub fn load_samples_by_day(
    conn: &Connection,
    vehicle_id: &str,
    date: NaiveDate,
) -> AppResult<Vec<Sample>> {
    let mut stmt = conn.prepare(
        "SELECT vehicle_id, timestamp, speed, lat, lon FROM samples
         WHERE vehicle_id = ?1 AND date(timestamp) = ?2
         ORDER BY timestamp ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map(params![vehicle_id, date_str], map_sample_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn map_sample_row(row: &Row) -> Result<Sample> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = parse_datetime(&ts_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(ts_str.clone())),
        )
    })?;

    Ok(Sample {
        vehicle_id: row.get("vehicle_id")?,
        timestamp,
        speed: row.get("speed")?,
        lat: row.get("lat")?,
        lon: row.get("lon")?,
    })
}

pub fn insert_sample(conn: &Connection, sample: &Sample) -> AppResult<()> {
    conn.execute(
        "INSERT INTO samples (vehicle_id, timestamp, speed, lat, lon)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            sample.vehicle_id,
            format_datetime(sample.timestamp),
            sample.speed,
            sample.lat,
            sample.lon,
        ],
    )?;
    Ok(())
}

/// Load the daily summary row for a vehicle-day and build the allocation
/// reference from it. A missing row is fatal: the allocator must not run
/// with a default lunch window or waiting budget.
pub fn load_daily_reference(
    conn: &Connection,
    vehicle_id: &str,
    date: NaiveDate,
    lunch_start: NaiveTime,
) -> AppResult<DailyReference> {
    let mut stmt = conn.prepare(
        "SELECT lunch_duration, waiting_budget FROM daily_summary
         WHERE vehicle_id = ?1 AND date = ?2",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let row: Option<(String, String)> = stmt
        .query_row(params![vehicle_id, date_str], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let (lunch_str, budget_str) = row.ok_or_else(|| AppError::NoReferenceForDay {
        vehicle: vehicle_id.to_string(),
        date: date_str,
    })?;

    Ok(DailyReference {
        date,
        vehicle_id: vehicle_id.to_string(),
        lunch_start,
        lunch_duration: parse_hms_duration(&lunch_str)?,
        waiting_budget: parse_hms_duration(&budget_str)?,
    })
}

pub fn insert_daily_summary(
    conn: &Connection,
    vehicle_id: &str,
    date: NaiveDate,
    lunch_duration: &str,
    waiting_budget: &str,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO daily_summary (vehicle_id, date, lunch_duration, waiting_budget)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(vehicle_id, date)
         DO UPDATE SET lunch_duration = ?3, waiting_budget = ?4",
        params![
            vehicle_id,
            date.format("%Y-%m-%d").to_string(),
            lunch_duration,
            waiting_budget,
        ],
    )?;
    Ok(())
}

/// Append one segment to the sink. No dedup here: the sink is append-only
/// and the caller owns the truncate-then-rerun contract.
pub fn insert_segment(conn: &Connection, seg: &AllocatedSegment) -> AppResult<()> {
    conn.execute(
        "INSERT INTO segments (vehicle_id, date, label, start_ts, end_ts, duration_secs)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            seg.vehicle_id,
            seg.date.format("%Y-%m-%d").to_string(),
            seg.label.to_db_str(),
            format_datetime(seg.start),
            format_datetime(seg.end),
            seg.duration().num_seconds(),
        ],
    )?;
    Ok(())
}

/// Truncate one vehicle-day of the sink. Returns the number of rows
/// removed.
pub fn clear_segments(conn: &Connection, vehicle_id: &str, date: NaiveDate) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM segments WHERE vehicle_id = ?1 AND date = ?2",
        params![vehicle_id, date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(n)
}

pub fn load_segments_by_day(
    conn: &Connection,
    vehicle_id: &str,
    date: NaiveDate,
) -> AppResult<Vec<AllocatedSegment>> {
    let mut stmt = conn.prepare(
        "SELECT vehicle_id, date, label, start_ts, end_ts FROM segments
         WHERE vehicle_id = ?1 AND date = ?2
         ORDER BY start_ts ASC, id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map(params![vehicle_id, date_str], map_segment_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn map_segment_row(row: &Row) -> Result<AllocatedSegment> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let label_str: String = row.get("label")?;
    let label = SegmentLabel::from_db_str(&label_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidLabel(label_str.clone())),
        )
    })?;

    let start_str: String = row.get("start_ts")?;
    let start = parse_datetime(&start_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(start_str.clone())),
        )
    })?;

    let end_str: String = row.get("end_ts")?;
    let end = parse_datetime(&end_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(end_str.clone())),
        )
    })?;

    Ok(AllocatedSegment {
        date,
        vehicle_id: row.get("vehicle_id")?,
        label,
        start,
        end,
    })
}
