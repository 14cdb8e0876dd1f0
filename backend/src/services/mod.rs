//! Domain logic for the Smart Farming Assistant

pub mod rules;
pub mod sensor;

pub use rules::generate_recommendations;
pub use sensor::simulate_reading;
