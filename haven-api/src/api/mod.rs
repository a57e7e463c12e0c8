//! HTTP API handlers for haven-api

pub mod checkin;
pub mod error;
pub mod flashcard;
pub mod health;
pub mod news;
pub mod tips;
pub mod trends;
pub mod weather;

pub use checkin::{create_checkin, list_checkins};
pub use error::ApiError;
pub use flashcard::{random_flashcard, submit_flashcard};
pub use health::{health_check, ml_health};
pub use news::get_news;
pub use tips::daily_tip;
pub use trends::mood_trends;
pub use weather::get_weather;
