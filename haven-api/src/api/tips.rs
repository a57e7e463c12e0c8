//! Daily tip endpoint

use axum::{extract::Query, extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::AppState;

/// GET /api/dailytip query parameters
#[derive(Debug, Deserialize)]
pub struct TipQuery {
    pub mood: Option<String>,
}

/// GET /api/dailytip?mood
///
/// With a mood: first tip whose category, title, or text contains it
/// case-insensitively, else a random tip. Without: a random tip.
pub async fn daily_tip(
    State(state): State<AppState>,
    Query(query): Query<TipQuery>,
) -> Json<Value> {
    let tip = state.catalog.tip_for_mood(query.mood.as_deref());
    Json(json!({ "tip": tip }))
}
