use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

/// The time span between a confirmed StartDriving and its paired
/// EndDriving event. Invariant: `start < end`.
#[derive(Debug, Clone, Serialize)]
pub struct BusyInterval {
    pub vehicle_id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BusyInterval {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}
