//! Movement segmenter.
//!
//! Scans an ordered per-vehicle sample stream once and emits alternating
//! StartDriving/EndDriving events using a debounced speed threshold:
//! one moving sample confirms a start, three consecutive stopped samples
//! confirm a stop. The caller guarantees a single vehicle and strictly
//! increasing timestamps; violations are rejected, never reordered.

use crate::errors::{AppError, AppResult};
use crate::models::driving_event::DrivingEvent;
use crate::models::event_kind::EventKind;
use crate::models::sample::Sample;

/// Speed threshold separating stopped from moving samples.
/// A reading of exactly 5.0 is classified as stopped.
pub const SPEED_THRESHOLD: f64 = 5.0;

/// Consecutive stopped samples required to confirm the end of a trip.
pub const STOP_DEBOUNCE: u32 = 3;

fn is_moving(speed: f64) -> bool {
    speed > SPEED_THRESHOLD
}

/// Scan state threaded through the pass. Local to each call, so
/// per-vehicle-day runs stay independent.
#[derive(Debug, Default)]
struct ScanState {
    /// Consecutive stopped samples since the last moving one.
    stopped_run: u32,
    /// Last sample of the current movement run, if a trip is open.
    movement: Option<Sample>,
}

/// Segment one vehicle's sample stream into driving events.
///
/// Empty input yields an empty event list. A trip still open at stream
/// end is closed with a trailing EndDriving at the last sample seen; a
/// stopped run shorter than the debounce window at stream end emits
/// nothing.
pub fn segment(samples: &[Sample]) -> AppResult<Vec<DrivingEvent>> {
    check_stream(samples)?;

    let mut state = ScanState::default();
    let mut events = Vec::new();

    for sample in samples {
        if is_moving(sample.speed) {
            if state.movement.is_none() {
                events.push(DrivingEvent::at_sample(EventKind::StartDriving, sample));
            }
            state.movement = Some(sample.clone());
            state.stopped_run = 0;
        } else {
            state.stopped_run += 1;
            // The stop is stamped from the last moving sample, not the
            // stopped sample that confirmed it.
            if state.stopped_run == STOP_DEBOUNCE
                && let Some(last_moving) = state.movement.take()
            {
                events.push(DrivingEvent::at_sample(EventKind::EndDriving, &last_moving));
            }
        }
    }

    if state.movement.is_some()
        && let Some(last) = samples.last()
    {
        events.push(DrivingEvent::at_sample(EventKind::EndDriving, last));
    }

    Ok(events)
}

/// Reject streams that break the caller's contract instead of guessing
/// an ordering.
fn check_stream(samples: &[Sample]) -> AppResult<()> {
    for w in samples.windows(2) {
        if w[1].vehicle_id != w[0].vehicle_id {
            return Err(AppError::InvalidInput(format!(
                "sample stream mixes vehicles '{}' and '{}'",
                w[0].vehicle_id, w[1].vehicle_id
            )));
        }
        if w[1].timestamp <= w[0].timestamp {
            return Err(AppError::InvalidInput(format!(
                "sample timestamps not strictly increasing at {}",
                w[1].timestamp
            )));
        }
    }
    Ok(())
}
