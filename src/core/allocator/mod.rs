//! Interval allocator.
//!
//! Splits one vehicle-day's busy intervals against the lunch window and
//! the daily waiting budget, producing labeled segments whose total
//! duration equals the input's. Lunch slices bypass the budget entirely;
//! they neither consume it nor flip the Waiting/Rest mode.

pub mod clip;
pub mod crossover;

use clip::RawLabel;
use crossover::CrossoverState;

use crate::errors::{AppError, AppResult};
use crate::models::allocated_segment::AllocatedSegment;
use crate::models::busy_interval::BusyInterval;
use crate::models::daily_reference::DailyReference;
use crate::models::segment_label::SegmentLabel;

/// Allocate one vehicle-day.
///
/// `intervals` must be chronological, non-overlapping, and already
/// clipped to the reference day. Deterministic: identical inputs always
/// yield identical output; there is no state beyond this call.
pub fn allocate(
    intervals: &[BusyInterval],
    reference: &DailyReference,
) -> AppResult<Vec<AllocatedSegment>> {
    check_intervals(intervals, reference)?;

    let (lunch_start, lunch_end) = reference.lunch_window();
    let mut state = CrossoverState::default();
    let mut segments = Vec::new();

    for interval in intervals {
        for slice in clip::clip_lunch(interval, lunch_start, lunch_end) {
            match slice.label {
                RawLabel::Lunch => segments.push(AllocatedSegment::new(
                    reference.date,
                    &reference.vehicle_id,
                    SegmentLabel::Lunch,
                    slice.start,
                    slice.end,
                )),
                RawLabel::NonLunch => state.apply(&slice, reference, &mut segments),
            }
        }
    }

    Ok(segments)
}

/// Reject interval lists that break the caller's contract.
fn check_intervals(intervals: &[BusyInterval], reference: &DailyReference) -> AppResult<()> {
    let (day_start, day_end) = reference.day_bounds();

    for iv in intervals {
        if iv.vehicle_id != reference.vehicle_id {
            return Err(AppError::InvalidInput(format!(
                "interval for vehicle '{}' allocated against reference for '{}'",
                iv.vehicle_id, reference.vehicle_id
            )));
        }
        if iv.start >= iv.end {
            return Err(AppError::InvalidInput(format!(
                "empty or inverted interval at {}",
                iv.start
            )));
        }
        if iv.start < day_start || iv.end > day_end {
            return Err(AppError::InvalidInput(format!(
                "interval {} - {} not clipped to {}",
                iv.start, iv.end, reference.date
            )));
        }
    }

    for w in intervals.windows(2) {
        if w[1].start < w[0].end {
            return Err(AppError::InvalidInput(format!(
                "intervals overlap or are out of order at {}",
                w[1].start
            )));
        }
    }

    Ok(())
}
