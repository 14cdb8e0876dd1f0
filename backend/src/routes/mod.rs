//! Route definitions for the Smart Farming Assistant API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/sensor-data", get(handlers::get_sensor_data))
        .route("/weather", get(handlers::get_weather))
        .route("/recommendations", get(handlers::get_recommendations))
        .route("/dashboard-data", get(handlers::get_dashboard_data))
        .route("/query", post(handlers::post_query))
}
