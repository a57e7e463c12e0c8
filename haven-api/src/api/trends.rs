//! Mood trend aggregation over recent check-ins

use axum::{extract::Query, extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::api::ApiError;
use crate::AppState;

const TREND_WINDOW: u32 = 100;

/// GET /api/mood_trends query parameters
#[derive(Debug, Deserialize)]
pub struct TrendsQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Per-day mood counts
#[derive(Debug, Serialize)]
pub struct DayCounts {
    pub date: String,
    pub moods: BTreeMap<String, u32>,
}

/// GET /api/mood_trends response body
#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub period: String,
    pub counts: Vec<DayCounts>,
}

/// GET /api/mood_trends?userId
///
/// Aggregates the user's last 100 check-ins into per-day mood counts,
/// dates ascending.
pub async fn mood_trends(
    State(state): State<AppState>,
    Query(query): Query<TrendsQuery>,
) -> Result<Json<TrendsResponse>, ApiError> {
    let user_id = query
        .user_id
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| "demo_user".to_string());

    let checkins = state
        .store
        .list(&user_id, TREND_WINDOW)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to fetch check-ins: {}", e)))?;

    let mut per_day: BTreeMap<String, BTreeMap<String, u32>> = BTreeMap::new();
    for checkin in &checkins {
        let date = checkin.timestamp.format("%Y-%m-%d").to_string();
        *per_day
            .entry(date)
            .or_default()
            .entry(checkin.mood.as_str().to_string())
            .or_insert(0) += 1;
    }

    let counts = per_day
        .into_iter()
        .map(|(date, moods)| DayCounts { date, moods })
        .collect();

    Ok(Json(TrendsResponse {
        period: format!("last{}", TREND_WINDOW),
        counts,
    }))
}
