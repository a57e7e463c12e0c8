//! Check-in submission and history
//!
//! Submission runs the full pipeline: validate, redact, resolve mood
//! server-side, persist, respond. A flagged inference always carries the
//! bundled helpline list.

use axum::{extract::Query, extract::State, Json};
use chrono::{DateTime, Utc};
use haven_common::redact::redact_pii;
use haven_common::types::{CheckinRecord, Mood, PlaylistEntry, SafetyFlag};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::api::ApiError;
use crate::catalog::Helpline;
use crate::AppState;

const DEFAULT_USER: &str = "demo_user";
const DEFAULT_LIMIT: u32 = 20;

/// POST /api/checkin request body
#[derive(Debug, Deserialize)]
pub struct CheckinRequest {
    pub user_id: Option<String>,
    pub text: Option<String>,
    /// Accepted for forward compatibility with the UI; not interpreted
    #[serde(default)]
    pub quick_emojis: Vec<String>,
}

/// POST /api/checkin response body
#[derive(Debug, Serialize)]
pub struct CheckinResponse {
    pub mood: Mood,
    pub message: String,
    pub playlist: Vec<PlaylistEntry>,
    pub safety_flag: SafetyFlag,
    /// Non-empty exactly when `safety_flag` is `flag`
    pub helplines: Option<Vec<Helpline>>,
    pub timestamp: DateTime<Utc>,
}

/// POST /api/checkin
pub async fn create_checkin(
    State(state): State<AppState>,
    Json(request): Json<CheckinRequest>,
) -> Result<Json<CheckinResponse>, ApiError> {
    let text = request.text.unwrap_or_default();
    if text.trim().chars().count() < 2 {
        return Err(ApiError::Validation(
            "Text is required and must be at least 2 characters".to_string(),
        ));
    }

    let user_id = request
        .user_id
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USER.to_string());

    let clean = redact_pii(&text);
    let inference = state.resolver.resolve(&clean).await;

    let record = CheckinRecord {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.clone(),
        text: clean,
        mood: inference.mood,
        message: inference.affirmation.clone(),
        playlist: inference.playlist.clone(),
        safety_flag: inference.safety_flag,
        timestamp: Utc::now(),
    };

    state
        .store
        .save(&record)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to save check-in: {}", e)))?;

    info!(
        user_id = %user_id,
        mood = %record.mood.as_str(),
        confidence = inference.confidence,
        emoji_count = request.quick_emojis.len(),
        "Check-in recorded"
    );

    let helplines = if record.safety_flag == SafetyFlag::Flag {
        Some(state.catalog.helplines.clone())
    } else {
        None
    };

    Ok(Json(CheckinResponse {
        mood: record.mood,
        message: record.message,
        playlist: record.playlist,
        safety_flag: record.safety_flag,
        helplines,
        timestamp: record.timestamp,
    }))
}

/// GET /api/checkins query parameters
#[derive(Debug, Deserialize)]
pub struct CheckinListQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub limit: Option<u32>,
}

/// GET /api/checkins?userId&limit
pub async fn list_checkins(
    State(state): State<AppState>,
    Query(query): Query<CheckinListQuery>,
) -> Result<Json<Vec<CheckinRecord>>, ApiError> {
    let user_id = query
        .user_id
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USER.to_string());
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let checkins = state
        .store
        .list(&user_id, limit)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to fetch check-ins: {}", e)))?;

    Ok(Json(checkins))
}
