use crate::core::{allocator, intervals, segmenter};
use crate::errors::AppResult;
use crate::models::{daily_reference::DailyReference, day_report::DayReport, sample::Sample};

pub struct Engine;

impl Engine {
    /// Full pipeline for one vehicle-day:
    /// samples → driving events → busy intervals → labeled segments.
    pub fn run_day(samples: &[Sample], reference: &DailyReference) -> AppResult<DayReport> {
        let events = segmenter::segment(samples)?;

        let intervals = match samples.last() {
            Some(last) => intervals::pair_events(&events, last.timestamp)?,
            None => Vec::new(),
        };

        let segments = allocator::allocate(&intervals, reference)?;

        Ok(DayReport {
            events,
            intervals,
            segments,
        })
    }
}
