//! Step 2 of allocation: split non-lunch time against the daily waiting
//! budget.

use chrono::TimeDelta;

use super::clip::RawSlice;
use crate::models::allocated_segment::AllocatedSegment;
use crate::models::daily_reference::DailyReference;
use crate::models::segment_label::SegmentLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocMode {
    Waiting,
    Resting,
}

/// Per-vehicle-day accumulators, reset at the start of each allocate()
/// call. The mode switch is one-way: once Resting, every later non-lunch
/// slice stays Rest for the remainder of the day.
#[derive(Debug)]
pub struct CrossoverState {
    pub consumed: TimeDelta,
    pub mode: AllocMode,
}

impl Default for CrossoverState {
    fn default() -> Self {
        Self {
            consumed: TimeDelta::zero(),
            mode: AllocMode::Waiting,
        }
    }
}

impl CrossoverState {
    /// Label one non-lunch slice, splitting it at the point where the
    /// waiting budget runs out.
    pub fn apply(
        &mut self,
        slice: &RawSlice,
        reference: &DailyReference,
        out: &mut Vec<AllocatedSegment>,
    ) {
        let duration = slice.end - slice.start;

        match self.mode {
            AllocMode::Waiting => {
                let new_consumed = self.consumed + duration;
                if new_consumed <= reference.waiting_budget {
                    out.push(AllocatedSegment::new(
                        reference.date,
                        &reference.vehicle_id,
                        SegmentLabel::Waiting,
                        slice.start,
                        slice.end,
                    ));
                    self.consumed = new_consumed;
                } else {
                    let overflow = new_consumed - reference.waiting_budget;
                    let split = slice.end - overflow;
                    // An exhausted budget makes the Waiting part empty.
                    if split > slice.start {
                        out.push(AllocatedSegment::new(
                            reference.date,
                            &reference.vehicle_id,
                            SegmentLabel::Waiting,
                            slice.start,
                            split,
                        ));
                    }
                    out.push(AllocatedSegment::new(
                        reference.date,
                        &reference.vehicle_id,
                        SegmentLabel::Rest,
                        split,
                        slice.end,
                    ));
                    self.consumed = reference.waiting_budget;
                    self.mode = AllocMode::Resting;
                }
            }
            AllocMode::Resting => {
                out.push(AllocatedSegment::new(
                    reference.date,
                    &reference.vehicle_id,
                    SegmentLabel::Rest,
                    slice.start,
                    slice.end,
                ));
                // Bookkeeping only; the mode never reverts.
                self.consumed = self.consumed + duration;
            }
        }
    }
}
