mod common;

use chrono::TimeDelta;
use common::{reference, sample, ts};
use fleettime::core::logic::Engine;
use fleettime::models::sample::Sample;
use fleettime::models::segment_label::SegmentLabel;

const VEH: &str = "HXA9626";
const DAY: &str = "2020-04-01";

/// One sample per minute from `start` ("HH:MM"), with the given speeds.
fn stream_from(start_minute: u32, speeds: &[f64]) -> Vec<Sample> {
    speeds
        .iter()
        .enumerate()
        .map(|(i, &speed)| {
            let m = start_minute + i as u32;
            sample(
                VEH,
                &format!("{} {:02}:{:02}:00", DAY, m / 60, m % 60),
                speed,
            )
        })
        .collect()
}

#[test]
fn test_empty_day_produces_empty_report() {
    let r = reference(VEH, DAY, 60, 30);
    let report = Engine::run_day(&[], &r).unwrap();

    assert!(report.events.is_empty());
    assert!(report.intervals.is_empty());
    assert!(report.segments.is_empty());
}

#[test]
fn test_single_trip_day_end_to_end() {
    // Stopped 08:00-08:04, driving 08:05-08:14, stopped 08:15-08:20.
    let mut speeds = vec![0.0; 5];
    speeds.extend(vec![30.0; 10]);
    speeds.extend(vec![0.0; 6]);
    let samples = stream_from(8 * 60, &speeds);

    let r = reference(VEH, DAY, 60, 30);
    let report = Engine::run_day(&samples, &r).unwrap();

    assert_eq!(report.intervals.len(), 1);
    assert_eq!(report.intervals[0].start, ts("2020-04-01 08:05:00"));
    assert_eq!(report.intervals[0].end, ts("2020-04-01 08:14:00"));

    // 9 busy minutes fit the 30-minute budget.
    assert_eq!(report.segments.len(), 1);
    assert_eq!(report.segments[0].label, SegmentLabel::Waiting);
    assert_eq!(report.total_busy(), TimeDelta::minutes(9));
    assert_eq!(report.total_for(SegmentLabel::Waiting), TimeDelta::minutes(9));
}

#[test]
fn test_trip_still_open_at_stream_end_is_accounted() {
    // Driving begins at 08:02 and the feed simply ends while moving.
    let samples = stream_from(8 * 60, &[0.0, 0.0, 25.0, 25.0, 25.0]);

    let r = reference(VEH, DAY, 60, 30);
    let report = Engine::run_day(&samples, &r).unwrap();

    assert_eq!(report.intervals.len(), 1);
    assert_eq!(report.intervals[0].start, ts("2020-04-01 08:02:00"));
    assert_eq!(report.intervals[0].end, ts("2020-04-01 08:04:00"));
    assert_eq!(report.total_busy(), TimeDelta::minutes(2));
}

#[test]
fn test_conservation_holds_from_samples_to_segments() {
    // Morning trip, a long trip across the lunch window, afternoon trip.
    let mut speeds = Vec::new();
    speeds.extend(vec![0.0; 10]); // 10:00-10:09 stopped
    speeds.extend(vec![40.0; 20]); // 10:10-10:29 driving
    speeds.extend(vec![0.0; 50]); // 10:30-11:19 stopped
    speeds.extend(vec![35.0; 90]); // 11:20-12:49 driving (spans lunch)
    speeds.extend(vec![0.0; 10]); // 12:50-12:59 stopped
    let samples = stream_from(10 * 60, &speeds);

    let r = reference(VEH, DAY, 60, 15);
    let report = Engine::run_day(&samples, &r).unwrap();

    let total_segments = report
        .segments
        .iter()
        .fold(TimeDelta::zero(), |acc, s| acc + s.duration());
    assert_eq!(total_segments, report.total_busy());

    // The lunch window produced a Lunch segment and the 15-minute budget
    // crossed over into Rest.
    assert!(report.total_for(SegmentLabel::Lunch) > TimeDelta::zero());
    assert!(report.total_for(SegmentLabel::Rest) > TimeDelta::zero());
    assert_eq!(report.total_for(SegmentLabel::Waiting), TimeDelta::minutes(15));
}

#[test]
fn test_zero_length_trip_is_dropped_before_allocation() {
    // A single moving sample at stream end opens and closes a trip at
    // the same timestamp; it must not reach the allocator.
    let samples = stream_from(8 * 60, &[0.0, 0.0, 30.0]);

    let r = reference(VEH, DAY, 60, 30);
    let report = Engine::run_day(&samples, &r).unwrap();

    assert_eq!(report.events.len(), 2);
    assert!(report.intervals.is_empty());
    assert!(report.segments.is_empty());
}
