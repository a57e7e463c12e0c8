//! Flashcard quiz endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::ApiError;
use crate::AppState;

/// Flashcard as served to clients: the answer index is stripped
#[derive(Debug, Serialize)]
pub struct PublicFlashcard {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub difficulty: String,
}

/// GET /api/flashcard/random
///
/// Serves `{item: null}` when no cards are loaded.
pub async fn random_flashcard(State(state): State<AppState>) -> Json<Value> {
    let item = state.catalog.random_flashcard().map(|card| PublicFlashcard {
        id: card.id,
        question: card.question.clone(),
        options: card.options.clone(),
        difficulty: card.difficulty.clone(),
    });
    Json(json!({ "item": item }))
}

/// POST /api/flashcard/submit request body
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub id: u32,
    pub selected: usize,
}

/// POST /api/flashcard/submit response body
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub correct: bool,
    pub correct_index: usize,
}

/// POST /api/flashcard/submit
pub async fn submit_flashcard(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let card = state
        .catalog
        .flashcard(request.id)
        .ok_or_else(|| ApiError::NotFound(format!("No flashcard with id {}", request.id)))?;

    Ok(Json(SubmitResponse {
        correct: card.answer == request.selected,
        correct_index: card.answer,
    }))
}
