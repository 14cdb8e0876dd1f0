//! Free-form question endpoint
//!
//! The context sent to the assistant is recomputed server-side from a fresh
//! reading, the current weather, and the rules; any client-supplied context
//! is ignored.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppResult;
use crate::models::SensorReading;
use crate::services::generate_recommendations;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub response: String,
}

/// Ask the farming assistant a question
pub async fn post_query(
    State(state): State<AppState>,
    Json(body): Json<QueryRequest>,
) -> AppResult<Json<QueryResponse>> {
    let city = body
        .city
        .unwrap_or_else(|| state.config.weather.default_city.clone());

    let sensor_data = SensorReading::simulate();
    let weather = state.weather.current(&city).await?;
    let recommendations = generate_recommendations(&sensor_data, &weather);

    let context = json!({
        "sensor_data": sensor_data,
        "weather": weather.description,
        "recommendations": recommendations,
    });

    let response = state.chat.ask(&body.question, &context).await?;

    Ok(Json(QueryResponse { response }))
}
