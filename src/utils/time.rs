//! Time utilities: parsing HH:MM / HH:MM:SS, duration parsing and formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok()
}

pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Parse an "HH:MM:SS" duration (the daily summary row format).
/// Hours may exceed 23.
pub fn parse_hms_duration(s: &str) -> AppResult<TimeDelta> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    let h: i64 = parts[0]
        .parse()
        .map_err(|_| AppError::InvalidDuration(s.to_string()))?;
    let m: i64 = parts[1]
        .parse()
        .map_err(|_| AppError::InvalidDuration(s.to_string()))?;
    let sec: i64 = parts[2]
        .parse()
        .map_err(|_| AppError::InvalidDuration(s.to_string()))?;

    if h < 0 || !(0..60).contains(&m) || !(0..60).contains(&sec) {
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    Ok(TimeDelta::seconds(h * 3600 + m * 60 + sec))
}

pub fn format_hms(d: TimeDelta) -> String {
    let sign = if d < TimeDelta::zero() { "-" } else { "" };
    let secs = d.num_seconds().abs();
    format!("{}{:02}:{:02}:{:02}", sign, secs / 3600, (secs / 60) % 60, secs % 60)
}
