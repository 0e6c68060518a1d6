pub mod allocated_segment;
pub mod busy_interval;
pub mod daily_reference;
pub mod day_report;
pub mod driving_event;
pub mod event_kind;
pub mod sample;
pub mod segment_label;
