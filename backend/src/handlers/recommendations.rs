//! Recommendations endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::weather::CityQuery;
use crate::models::{Recommendation, SensorReading};
use crate::services::generate_recommendations;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub sensor_data: SensorReading,
    pub weather_data: WeatherSummary,
    pub recommendations: Vec<Recommendation>,
}

/// The slice of the weather snapshot the recommendations view needs
#[derive(Debug, Serialize)]
pub struct WeatherSummary {
    pub location: String,
    pub description: String,
}

/// Simulate a reading, fetch weather, and evaluate the rules
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<RecommendationsResponse>> {
    let city = query.city_or_default(&state);

    let sensor_data = SensorReading::simulate();
    let weather = state.weather.current(&city).await?;
    let recommendations = generate_recommendations(&sensor_data, &weather);

    Ok(Json(RecommendationsResponse {
        sensor_data,
        weather_data: WeatherSummary {
            location: weather.location,
            description: weather.description,
        },
        recommendations,
    }))
}
