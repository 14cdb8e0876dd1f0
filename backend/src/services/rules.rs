//! Threshold rules producing farming recommendations
//!
//! Three fixed, independent rules checked in a fixed order: irrigation,
//! lime treatment, shade/cooling. A pure function of its inputs.

use crate::external::weather::CurrentWeather;
use crate::models::{Recommendation, SensorReading};

/// Evaluate all rules against a reading and the current weather.
///
/// Every rule is checked; output order is always irrigation, lime, shade.
/// Returns an empty list when nothing fires.
pub fn generate_recommendations(
    reading: &SensorReading,
    weather: &CurrentWeather,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    let rain_desc = weather.description.to_lowercase();

    // Rule 1: Irrigation
    if reading.moisture < 20 && !rain_desc.contains("rain") {
        recs.push(Recommendation {
            action: "Irrigate within 12 hours".to_string(),
            reason: format!(
                "Soil moisture is {}%, and no rain is expected.",
                reading.moisture
            ),
        });
    }

    // Rule 2: Lime treatment
    if reading.ph < 5.5 {
        recs.push(Recommendation {
            action: "Apply lime treatment".to_string(),
            reason: format!(
                "Soil pH is {:.1}, which is too acidic for most crops.",
                reading.ph
            ),
        });
    }

    // Rule 3: Shade or cooling
    if reading.temperature > 35 {
        recs.push(Recommendation {
            action: "Provide shade or cooling".to_string(),
            reason: format!(
                "Temperature is {}°C, which may stress crops.",
                reading.temperature
            ),
        });
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn weather_with_description(description: &str) -> CurrentWeather {
        CurrentWeather {
            location: "Nairobi".to_string(),
            country: "KE".to_string(),
            condition: String::new(),
            description: description.to_string(),
            temperature_celsius: 22.0,
            humidity_percent: 60,
            pressure_hpa: 1013,
            wind_speed_mps: 3.0,
            cloud_coverage_percent: 20,
            sunrise: DateTime::<Utc>::UNIX_EPOCH,
            sunset: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    fn reading(moisture: i32, ph: f64, temperature: i32) -> SensorReading {
        SensorReading {
            moisture,
            ph,
            temperature,
            humidity: 60,
        }
    }

    #[test]
    fn all_three_rules_fire_in_fixed_order() {
        let recs = generate_recommendations(
            &reading(15, 5.0, 38),
            &weather_with_description("clear sky"),
        );

        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].action, "Irrigate within 12 hours");
        assert_eq!(recs[1].action, "Apply lime treatment");
        assert_eq!(recs[2].action, "Provide shade or cooling");
    }

    #[test]
    fn healthy_reading_yields_no_recommendations() {
        let recs = generate_recommendations(
            &reading(30, 6.0, 28),
            &weather_with_description("heavy rain"),
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn rain_in_forecast_suppresses_irrigation() {
        let recs = generate_recommendations(
            &reading(10, 7.0, 25),
            &weather_with_description("light rain"),
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn rain_check_is_case_insensitive() {
        let recs = generate_recommendations(
            &reading(10, 7.0, 25),
            &weather_with_description("Light Rain Showers"),
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn empty_description_means_no_rain_expected() {
        let recs =
            generate_recommendations(&reading(10, 7.0, 25), &weather_with_description(""));
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].action, "Irrigate within 12 hours");
    }

    #[test]
    fn reason_references_exact_measurements() {
        let recs = generate_recommendations(
            &reading(15, 5.0, 38),
            &weather_with_description("clear sky"),
        );

        assert_eq!(
            recs[0].reason,
            "Soil moisture is 15%, and no rain is expected."
        );
        assert_eq!(
            recs[1].reason,
            "Soil pH is 5.0, which is too acidic for most crops."
        );
        assert_eq!(recs[2].reason, "Temperature is 38°C, which may stress crops.");
    }

    #[test]
    fn thresholds_are_strict() {
        // Exactly at each threshold: nothing fires
        let recs = generate_recommendations(
            &reading(20, 5.5, 35),
            &weather_with_description("clear sky"),
        );
        assert!(recs.is_empty());
    }
}
