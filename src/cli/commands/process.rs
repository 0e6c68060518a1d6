use chrono::{NaiveDate, NaiveTime};
use rusqlite::Connection;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Engine;
use crate::db;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::segment_label::SegmentLabel;
use crate::ui::messages;
use crate::utils::date;
use crate::utils::time::format_hms;

/// Handle the `process` command: the batch driver.
///
/// For each requested vehicle-day: truncate previously persisted segments
/// (unless --keep), load the day's samples and its daily summary row, run
/// the engine, and append each emitted segment to the sink in order.
/// Truncate-then-rerun is the recovery procedure after a partial run.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process {
        vehicle,
        date: date_str,
        to,
        keep,
    } = cmd
    {
        let start =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
        let end = match to {
            Some(t) => date::parse_date(t).ok_or_else(|| AppError::InvalidDate(t.clone()))?,
            None => start,
        };
        if end < start {
            return Err(AppError::InvalidInput(format!(
                "end date {} is before start date {}",
                end, start
            )));
        }

        let lunch_start = cfg.lunch_start_time()?;
        let conn = db::open(&cfg.database)?;

        for day in date::date_range(start, end) {
            process_day(&conn, vehicle, day, lunch_start, *keep)?;
        }
    }
    Ok(())
}

fn process_day(
    conn: &Connection,
    vehicle: &str,
    day: NaiveDate,
    lunch_start: NaiveTime,
    keep: bool,
) -> AppResult<()> {
    let samples = queries::load_samples_by_day(conn, vehicle, day)?;
    if samples.is_empty() {
        messages::warning(format!("No samples for {} on {}, skipping", vehicle, day));
        return Ok(());
    }

    let reference = queries::load_daily_reference(conn, vehicle, day, lunch_start)?;

    if !keep {
        let removed = queries::clear_segments(conn, vehicle, day)?;
        if removed > 0 {
            messages::info(format!(
                "Removed {} previously persisted segments for {} on {}",
                removed, vehicle, day
            ));
        }
    }

    let report = Engine::run_day(&samples, &reference)?;

    for seg in &report.segments {
        queries::insert_segment(conn, seg)?;
    }

    messages::success(format!(
        "{} {}: {} trips | busy {} | waiting {} | rest {} | lunch {}",
        vehicle,
        day,
        report.intervals.len(),
        format_hms(report.total_busy()),
        format_hms(report.total_for(SegmentLabel::Waiting)),
        format_hms(report.total_for(SegmentLabel::Rest)),
        format_hms(report.total_for(SegmentLabel::Lunch)),
    ));

    Ok(())
}
