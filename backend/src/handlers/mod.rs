//! HTTP handlers for the Smart Farming Assistant API

pub mod dashboard;
pub mod health;
pub mod query;
pub mod recommendations;
pub mod sensor;
pub mod weather;

pub use dashboard::get_dashboard_data;
pub use health::{health_check, root};
pub use query::post_query;
pub use recommendations::get_recommendations;
pub use sensor::get_sensor_data;
pub use weather::get_weather;
