//! Weather passthrough endpoint

use axum::{extract::Query, extract::State, Json};
use serde::Deserialize;

use crate::services::weather_client::WeatherReport;
use crate::AppState;

/// GET /api/weather query parameters
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub zip: Option<String>,
}

/// GET /api/weather?zip
///
/// Always succeeds; upstream failures degrade to the fallback payload
/// inside the client.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Json<WeatherReport> {
    Json(state.weather.get_weather(query.zip.as_deref()).await)
}
