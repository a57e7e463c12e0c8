//! Service and upstream health endpoints

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use crate::AppState;

/// GET /healthz response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /healthz
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "haven-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/ml-health
///
/// Probes the remote mood-analysis service. Reports unhealthy (rather
/// than erroring) when no remote service is configured.
pub async fn ml_health(State(state): State<AppState>) -> Json<Value> {
    let (healthy, url) = match &state.ml_probe {
        Some(client) => (client.is_healthy().await, Some(client.base_url().to_string())),
        None => (false, None),
    };

    Json(json!({
        "ml_service_healthy": healthy,
        "ml_service_url": url,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
