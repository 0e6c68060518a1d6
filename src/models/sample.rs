use chrono::NaiveDateTime;
use serde::Serialize;

/// One raw telemetry reading for a vehicle.
/// The feed delivers these per vehicle, sorted by timestamp ascending, with
/// speed/lat/lon already parsed to numeric form.
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub vehicle_id: String,     // ⇔ samples.vehicle_id (TEXT, plate)
    pub timestamp: NaiveDateTime, // ⇔ samples.timestamp (TEXT "YYYY-MM-DD HH:MM:SS")
    pub speed: f64,             // ⇔ samples.speed (REAL, non-negative)
    pub lat: f64,
    pub lon: f64,
}

impl Sample {
    pub fn new(vehicle_id: &str, timestamp: NaiveDateTime, speed: f64, lat: f64, lon: f64) -> Self {
        Self {
            vehicle_id: vehicle_id.to_string(),
            timestamp,
            speed,
            lat,
            lon,
        }
    }
}
