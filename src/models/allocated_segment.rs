use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::Serialize;

use super::segment_label::SegmentLabel;

/// One labeled, persisted output time range produced by the allocator.
/// Write-once: re-running allocation for the same vehicle-day without an
/// external truncate produces duplicate rows (documented operational
/// contract of the append-only sink).
#[derive(Debug, Clone, Serialize)]
pub struct AllocatedSegment {
    pub date: NaiveDate,
    pub vehicle_id: String,
    pub label: SegmentLabel,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl AllocatedSegment {
    pub fn new(
        date: NaiveDate,
        vehicle_id: &str,
        label: SegmentLabel,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            date,
            vehicle_id: vehicle_id.to_string(),
            label,
            start,
            end,
        }
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}
