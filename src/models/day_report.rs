use chrono::TimeDelta;

use super::allocated_segment::AllocatedSegment;
use super::busy_interval::BusyInterval;
use super::driving_event::DrivingEvent;
use super::segment_label::SegmentLabel;

/// Composite engine output for one vehicle-day.
#[derive(Debug, Default, Clone)]
pub struct DayReport {
    pub events: Vec<DrivingEvent>,
    pub intervals: Vec<BusyInterval>,
    pub segments: Vec<AllocatedSegment>,
}

impl DayReport {
    /// Total busy time reconstructed from the event stream.
    pub fn total_busy(&self) -> TimeDelta {
        self.intervals
            .iter()
            .fold(TimeDelta::zero(), |acc, iv| acc + iv.duration())
    }

    /// Total allocated time carrying the given label.
    pub fn total_for(&self, label: SegmentLabel) -> TimeDelta {
        self.segments
            .iter()
            .filter(|s| s.label == label)
            .fold(TimeDelta::zero(), |acc, s| acc + s.duration())
    }
}
