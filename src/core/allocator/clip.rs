//! Step 1 of allocation: clip a busy interval against the lunch window.
//!
//! Classification is a single pure function returning ordered labeled
//! slices; the Waiting/Rest crossover never looks at the window itself.

use chrono::NaiveDateTime;

use crate::models::busy_interval::BusyInterval;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawLabel {
    Lunch,
    NonLunch,
}

/// One lunch-tagged slice of a busy interval.
#[derive(Debug, Clone)]
pub struct RawSlice {
    pub label: RawLabel,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Split `interval` against `[lunch_start, lunch_end)`.
///
/// Slices come out in chronological order and cover the interval exactly,
/// so total duration is conserved. Coinciding boundaries (for example a
/// zero lunch duration) would produce empty slices; those are dropped.
pub fn clip_lunch(
    interval: &BusyInterval,
    lunch_start: NaiveDateTime,
    lunch_end: NaiveDateTime,
) -> Vec<RawSlice> {
    let (start, end) = (interval.start, interval.end);
    let mut slices = Vec::new();

    if end <= lunch_start || start >= lunch_end {
        // Entirely outside the window.
        push(&mut slices, RawLabel::NonLunch, start, end);
    } else if start >= lunch_start && end <= lunch_end {
        // Entirely inside the window.
        push(&mut slices, RawLabel::Lunch, start, end);
    } else if start < lunch_start && end <= lunch_end {
        // Enters the window.
        push(&mut slices, RawLabel::NonLunch, start, lunch_start);
        push(&mut slices, RawLabel::Lunch, lunch_start, end);
    } else if start < lunch_start {
        // Spans the whole window.
        push(&mut slices, RawLabel::NonLunch, start, lunch_start);
        push(&mut slices, RawLabel::Lunch, lunch_start, lunch_end);
        push(&mut slices, RawLabel::NonLunch, lunch_end, end);
    } else {
        // Starts inside the window, ends after it.
        push(&mut slices, RawLabel::Lunch, start, lunch_end);
        push(&mut slices, RawLabel::NonLunch, lunch_end, end);
    }

    slices
}

fn push(slices: &mut Vec<RawSlice>, label: RawLabel, start: NaiveDateTime, end: NaiveDateTime) {
    if end > start {
        slices.push(RawSlice { label, start, end });
    }
}
