//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap current-weather API, queried by city
//! name with metric units.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_url: String,
    api_key: String,
}

/// Current weather conditions for a city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub location: String,
    pub country: String,
    pub condition: String,
    pub description: String,
    pub temperature_celsius: f64,
    pub humidity_percent: i32,
    pub pressure_hpa: i32,
    pub wind_speed_mps: f64,
    pub cloud_coverage_percent: i32,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    weather: Vec<OWMWeather>,
    main: OWMMain,
    wind: OWMWind,
    clouds: OWMClouds,
    sys: OWMSys,
    name: String,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    pressure: i32,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OWMClouds {
    all: i32,
}

#[derive(Debug, Deserialize)]
struct OWMSys {
    #[serde(default)]
    country: String,
    sunrise: i64,
    sunset: i64,
}

impl WeatherClient {
    /// Create a new WeatherClient with an explicit request timeout
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    /// Fetch current weather conditions by city name
    pub async fn current(&self, city: &str) -> AppResult<CurrentWeather> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("q", city), ("appid", &self.api_key), ("units", "metric")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherApi { status, body });
        }

        let data: OWMCurrentResponse = response.json().await?;

        Ok(convert_current_response(data))
    }
}

/// Convert the OpenWeatherMap response to our format.
///
/// An empty `weather` array yields an empty condition/description, which the
/// irrigation rule treats as "no rain expected".
fn convert_current_response(data: OWMCurrentResponse) -> CurrentWeather {
    let weather = data.weather.first();

    CurrentWeather {
        location: data.name,
        country: data.sys.country,
        condition: weather.map(|w| w.main.clone()).unwrap_or_default(),
        description: weather.map(|w| w.description.clone()).unwrap_or_default(),
        temperature_celsius: data.main.temp,
        humidity_percent: data.main.humidity,
        pressure_hpa: data.main.pressure,
        wind_speed_mps: data.wind.speed,
        cloud_coverage_percent: data.clouds.all,
        sunrise: DateTime::from_timestamp(data.sys.sunrise, 0).unwrap_or_else(Utc::now),
        sunset: DateTime::from_timestamp(data.sys.sunset, 0).unwrap_or_else(Utc::now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_response() {
        let body = serde_json::json!({
            "coord": {"lon": 36.8167, "lat": -1.2833},
            "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
            "main": {"temp": 21.3, "feels_like": 21.0, "temp_min": 20.0, "temp_max": 23.0,
                     "pressure": 1016, "humidity": 68},
            "wind": {"speed": 4.1, "deg": 80},
            "clouds": {"all": 40},
            "dt": 1717_000_000,
            "sys": {"country": "KE", "sunrise": 1716_951_600, "sunset": 1716_995_400},
            "name": "Nairobi"
        });

        let data: OWMCurrentResponse = serde_json::from_value(body).unwrap();
        let weather = convert_current_response(data);

        assert_eq!(weather.location, "Nairobi");
        assert_eq!(weather.country, "KE");
        assert_eq!(weather.description, "light rain");
        assert_eq!(weather.temperature_celsius, 21.3);
        assert_eq!(weather.humidity_percent, 68);
        assert_eq!(weather.pressure_hpa, 1016);
        assert_eq!(weather.wind_speed_mps, 4.1);
        assert_eq!(weather.cloud_coverage_percent, 40);
    }

    #[test]
    fn empty_weather_array_gives_empty_description() {
        let body = serde_json::json!({
            "weather": [],
            "main": {"temp": 25.0, "pressure": 1010, "humidity": 50},
            "wind": {"speed": 1.0},
            "clouds": {"all": 0},
            "sys": {"country": "KE", "sunrise": 0, "sunset": 0},
            "name": "Nairobi"
        });

        let data: OWMCurrentResponse = serde_json::from_value(body).unwrap();
        let weather = convert_current_response(data);

        assert_eq!(weather.description, "");
        assert_eq!(weather.condition, "");
    }
}
