//! Weather endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::AppState;

/// Query parameters naming the city to report on
#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

impl CityQuery {
    /// City named in the request, or the configured default
    pub fn city_or_default(&self, state: &AppState) -> String {
        self.city
            .clone()
            .unwrap_or_else(|| state.config.weather.default_city.clone())
    }
}

/// Reshaped weather snapshot returned to the front end
#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub location: String,
    pub country: String,
    pub weather: String,
    pub temperature: f64,
    pub humidity: i32,
    pub wind_speed: f64,
    pub cloud_coverage: i32,
    pub pressure: i32,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

/// Get current weather for a city
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<WeatherResponse>> {
    let city = query.city_or_default(&state);
    let weather = state.weather.current(&city).await?;

    Ok(Json(WeatherResponse {
        location: weather.location,
        country: weather.country,
        weather: weather.description,
        temperature: weather.temperature_celsius,
        humidity: weather.humidity_percent,
        wind_speed: weather.wind_speed_mps,
        cloud_coverage: weather.cloud_coverage_percent,
        pressure: weather.pressure_hpa,
        sunrise: weather.sunrise,
        sunset: weather.sunset,
    }))
}
