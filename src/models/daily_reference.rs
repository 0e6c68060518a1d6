use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Per-vehicle-day allocation parameters, loaded once before allocation
/// and immutable for the run. `lunch_duration` and `waiting_budget` come
/// from the daily summary row; `lunch_start` is configured (11:30 by
/// default).
#[derive(Debug, Clone)]
pub struct DailyReference {
    pub date: NaiveDate,
    pub vehicle_id: String,
    pub lunch_start: NaiveTime,
    pub lunch_duration: TimeDelta,
    pub waiting_budget: TimeDelta,
}

impl DailyReference {
    /// Absolute lunch window for this day.
    /// The end is derived from `lunch_duration`, not a fixed wall-clock
    /// time: if the duration differs from the nominal window length, the
    /// computed boundary governs.
    pub fn lunch_window(&self) -> (NaiveDateTime, NaiveDateTime) {
        let start = self.date.and_time(self.lunch_start);
        (start, start + self.lunch_duration)
    }

    /// Midnight-to-midnight bounds of this day.
    pub fn day_bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        let start = self.date.and_time(NaiveTime::MIN);
        (start, start + TimeDelta::days(1))
    }
}
