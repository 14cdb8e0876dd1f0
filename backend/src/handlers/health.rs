//! Liveness and banner handlers

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct BannerResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Root banner endpoint handler
pub async fn root() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Smart Farming Assistant API".to_string(),
    })
}

/// Health check endpoint handler
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Backend is running...".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
