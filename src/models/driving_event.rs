use chrono::NaiveDateTime;
use serde::Serialize;

use super::{event_kind::EventKind, sample::Sample};

/// A confirmed driving state change, derived from the sample stream.
/// Within one vehicle's sequence the kinds strictly alternate, starting
/// with StartDriving.
#[derive(Debug, Clone, Serialize)]
pub struct DrivingEvent {
    pub vehicle_id: String,
    pub timestamp: NaiveDateTime,
    pub kind: EventKind,
    pub speed: f64,
    pub lat: f64,
    pub lon: f64,
}

impl DrivingEvent {
    /// Build an event stamped from the given sample.
    pub fn at_sample(kind: EventKind, sample: &Sample) -> Self {
        Self {
            vehicle_id: sample.vehicle_id.clone(),
            timestamp: sample.timestamp,
            kind,
            speed: sample.speed,
            lat: sample.lat,
            lon: sample.lon,
        }
    }
}
