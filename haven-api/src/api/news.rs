//! News passthrough endpoint

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// GET /api/news
///
/// Always succeeds; upstream failures degrade to the bundled fallback
/// items inside the client.
pub async fn get_news(State(state): State<AppState>) -> Json<Value> {
    let items = state.news.get_news().await;
    Json(json!({ "items": items }))
}
