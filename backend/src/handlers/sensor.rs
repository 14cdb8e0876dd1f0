//! Sensor data endpoint

use axum::Json;

use crate::models::SensorReading;

/// Get a fresh simulated sensor reading
pub async fn get_sensor_data() -> Json<SensorReading> {
    Json(SensorReading::simulate())
}
