//! Domain models for the Smart Farming Assistant
//!
//! Transient, per-request value types; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// A simulated snapshot of four soil/environmental measurements.
///
/// Ranges are enforced by construction in [`crate::services::sensor`]:
/// moisture 10-40 %, pH 4.5-7.5 (one decimal), temperature 20-35 °C,
/// humidity 50-90 %.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub moisture: i32,
    #[serde(rename = "pH")]
    pub ph: f64,
    pub temperature: i32,
    pub humidity: i32,
}

/// An actionable farming suggestion with a human-readable justification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Short imperative, e.g. "Apply lime treatment"
    pub action: String,
    /// Sentence referencing the measurement that triggered the rule
    pub reason: String,
}
