use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db;
use crate::db::queries::load_segments_by_day;
use crate::errors::{AppError, AppResult};
use crate::models::allocated_segment::AllocatedSegment;
use crate::utils::date;
use crate::utils::time::{format_datetime, format_hms};
use chrono::TimeDelta;

/// Handle the `list` command: print persisted segments for a vehicle-day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        vehicle,
        date: date_str,
        json,
    } = cmd
    {
        let day =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let conn = db::open(&cfg.database)?;
        let segments = load_segments_by_day(&conn, vehicle, day)?;

        if *json {
            let out = serde_json::to_string_pretty(&segments)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        if segments.is_empty() {
            println!("No segments for {} on {}", vehicle, day);
            return Ok(());
        }

        print_segments(&segments);
    }
    Ok(())
}

fn print_segments(segments: &[AllocatedSegment]) {
    println!("{:<8} {:<20} {:<20} {:>9}", "LABEL", "START", "END", "DURATION");

    let mut total = TimeDelta::zero();
    for seg in segments {
        total = total + seg.duration();
        println!(
            "{:<8} {:<20} {:<20} {:>9}",
            seg.label.to_db_str(),
            format_datetime(seg.start),
            format_datetime(seg.end),
            format_hms(seg.duration()),
        );
    }

    println!("{:<50} {:>9}", "TOTAL", format_hms(total));
}
