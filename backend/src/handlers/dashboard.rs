//! Dashboard aggregation endpoint
//!
//! The superset flow: simulate a reading, fetch weather, evaluate rules,
//! then ask the assistant to explain the first recommendation. A weather
//! failure aborts the whole aggregation; the explanation step runs only
//! when at least one rule fired.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::error::AppResult;
use crate::handlers::weather::CityQuery;
use crate::models::{Recommendation, SensorReading};
use crate::services::generate_recommendations;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub timestamp: String,
    pub sensor_data: SensorReading,
    pub weather: DashboardWeather,
    pub recommendations: Vec<Recommendation>,
    pub explanation: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DashboardWeather {
    pub location: String,
    pub description: String,
    pub temperature: f64,
    pub humidity: i32,
}

/// Get the full dashboard aggregation for a city
pub async fn get_dashboard_data(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<DashboardResponse>> {
    let city = query.city_or_default(&state);

    let sensor_data = SensorReading::simulate();
    let weather = state.weather.current(&city).await?;
    let recommendations = generate_recommendations(&sensor_data, &weather);

    // Explain the first recommendation, if any fired
    let explanation = match recommendations.first() {
        Some(rec) => {
            let question = format!("Why should I {}?", rec.action.to_lowercase());
            let context = json!({
                "sensor_data": sensor_data,
                "weather": weather.description,
                "recommendation": rec,
            });
            Some(state.chat.ask(&question, &context).await?)
        }
        None => None,
    };

    Ok(Json(DashboardResponse {
        timestamp: Utc::now().to_rfc3339(),
        sensor_data,
        weather: DashboardWeather {
            location: weather.location,
            description: weather.description,
            temperature: weather.temperature_celsius,
            humidity: weather.humidity_percent,
        },
        recommendations,
        explanation,
    }))
}
