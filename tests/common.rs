#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use fleettime::models::busy_interval::BusyInterval;
use fleettime::models::daily_reference::DailyReference;
use fleettime::models::sample::Sample;
use fleettime::utils::time::parse_time;

pub fn ft() -> Command {
    cargo_bin_cmd!("fleettime")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fleettime.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("bad timestamp literal")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("bad date literal")
}

pub fn sample(vehicle: &str, t: &str, speed: f64) -> Sample {
    Sample::new(vehicle, ts(t), speed, -3.7319, -38.5267)
}

pub fn interval(vehicle: &str, start: &str, end: &str) -> BusyInterval {
    BusyInterval {
        vehicle_id: vehicle.to_string(),
        start: ts(start),
        end: ts(end),
    }
}

/// Daily reference with the standard 11:30 lunch start.
pub fn reference(
    vehicle: &str,
    day: &str,
    lunch_minutes: i64,
    budget_minutes: i64,
) -> DailyReference {
    DailyReference {
        date: date(day),
        vehicle_id: vehicle.to_string(),
        lunch_start: parse_time("11:30").unwrap(),
        lunch_duration: TimeDelta::minutes(lunch_minutes),
        waiting_budget: TimeDelta::minutes(budget_minutes),
    }
}

/// Initialize the schema and seed one vehicle-day directly through the
/// library DB API: a stopped head, one trip, a stopped tail, plus the
/// daily summary row.
pub fn seed_simple_day(db_path: &str, vehicle: &str, day: &str) {
    let conn = fleettime::db::open(db_path).expect("open db");
    fleettime::db::initialize::init_db(&conn).expect("init db");

    for minute in 0..=20 {
        let speed = if (5..15).contains(&minute) { 30.0 } else { 0.0 };
        let s = sample(vehicle, &format!("{} 08:{:02}:00", day, minute), speed);
        fleettime::db::queries::insert_sample(&conn, &s).expect("insert sample");
    }

    fleettime::db::queries::insert_daily_summary(&conn, vehicle, date(day), "01:00:00", "00:30:00")
        .expect("insert daily summary");
}

pub fn count_segments(db_path: &str, vehicle: &str, day: &str) -> i64 {
    let conn = fleettime::db::open(db_path).expect("open db");
    conn.query_row(
        "SELECT COUNT(*) FROM segments WHERE vehicle_id = ?1 AND date = ?2",
        rusqlite::params![vehicle, day],
        |row| row.get(0),
    )
    .expect("count segments")
}
