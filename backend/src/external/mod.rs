//! External API integrations

pub mod ai_chat;
pub mod weather;

pub use ai_chat::ChatClient;
pub use weather::WeatherClient;
