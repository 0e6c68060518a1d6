//! Pairing of driving events into busy intervals.

use chrono::NaiveDateTime;

use crate::errors::{AppError, AppResult};
use crate::models::busy_interval::BusyInterval;
use crate::models::driving_event::DrivingEvent;
use crate::models::event_kind::EventKind;

/// Pair each StartDriving with the next EndDriving for the same vehicle.
///
/// A trailing unmatched StartDriving is closed at `stream_end` (the
/// timestamp of the last sample). Pairs with no extent are dropped: they
/// carry no accountable time. Alternation violations are rejected.
pub fn pair_events(
    events: &[DrivingEvent],
    stream_end: NaiveDateTime,
) -> AppResult<Vec<BusyInterval>> {
    let mut intervals = Vec::new();
    let mut open: Option<&DrivingEvent> = None;

    for ev in events {
        match ev.kind {
            EventKind::StartDriving => {
                if open.is_some() {
                    return Err(AppError::InvalidInput(format!(
                        "consecutive StartDriving events at {}",
                        ev.timestamp
                    )));
                }
                open = Some(ev);
            }
            EventKind::EndDriving => {
                let Some(start) = open.take() else {
                    return Err(AppError::InvalidInput(format!(
                        "EndDriving without a matching StartDriving at {}",
                        ev.timestamp
                    )));
                };
                if ev.timestamp > start.timestamp {
                    intervals.push(BusyInterval {
                        vehicle_id: start.vehicle_id.clone(),
                        start: start.timestamp,
                        end: ev.timestamp,
                    });
                }
            }
        }
    }

    if let Some(start) = open
        && stream_end > start.timestamp
    {
        intervals.push(BusyInterval {
            vehicle_id: start.vehicle_id.clone(),
            start: start.timestamp,
            end: stream_end,
        });
    }

    Ok(intervals)
}
