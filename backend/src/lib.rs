//! Smart Farming Assistant - Backend Server
//!
//! Simulates farm sensor readings, combines them with live weather data,
//! applies threshold rules to produce farming recommendations, and asks a
//! chat completion API to explain them in plain language.

use std::{sync::Arc, time::Duration};

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use crate::config::Config;

use crate::error::AppResult;
use crate::external::{ChatClient, WeatherClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherClient,
    pub chat: ChatClient,
}

impl AppState {
    /// Build application state from loaded configuration
    pub fn from_config(config: Config) -> AppResult<Self> {
        let weather = WeatherClient::new(
            config.weather.api_url.clone(),
            config.weather.api_key.clone(),
            Duration::from_secs(config.weather.timeout_secs),
        )?;
        let chat = ChatClient::new(
            config.ai.api_url.clone(),
            config.ai.api_key.clone(),
            config.ai.model.clone(),
            Duration::from_secs(config.ai.timeout_secs),
        )?;

        Ok(Self {
            config: Arc::new(config),
            weather,
            chat,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration: fully open, the API is consumed by an
    // unauthenticated browser front end
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
