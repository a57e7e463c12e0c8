//! haven-api library - Haven wellness backend
//!
//! HTTP backend for the Haven youth-wellness app: check-in submission and
//! history, mood resolution with remote/local/rule fallback, daily tips,
//! flashcards, and weather/news enrichment widgets.

use axum::http::HeaderValue;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod catalog;
pub mod services;
pub mod store;

use catalog::Catalog;
use services::{MoodResolver, NewsClient, RemoteMlClient, WeatherClient};
use store::CheckinStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CheckinStore>,
    pub resolver: Arc<MoodResolver>,
    pub catalog: Arc<Catalog>,
    pub weather: Arc<WeatherClient>,
    pub news: Arc<NewsClient>,
    /// Separate client for the ml-health probe; None when no remote
    /// service is configured
    pub ml_probe: Option<Arc<RemoteMlClient>>,
}

/// Build the application router
///
/// All routes are public; `frontend_origin` restricts CORS when set and
/// allows any origin otherwise.
pub fn build_router(state: AppState, frontend_origin: Option<HeaderValue>) -> Router {
    use axum::routing::{get, post};

    let cors = match frontend_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(origin))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
        None => CorsLayer::permissive(),
    };

    Router::new()
        .route("/healthz", get(api::health_check))
        .route("/api/ml-health", get(api::ml_health))
        .route("/api/checkin", post(api::create_checkin))
        .route("/api/checkins", get(api::list_checkins))
        .route("/api/dailytip", get(api::daily_tip))
        .route("/api/flashcard/random", get(api::random_flashcard))
        .route("/api/flashcard/submit", post(api::submit_flashcard))
        .route("/api/weather", get(api::get_weather))
        .route("/api/news", get(api::get_news))
        .route("/api/mood_trends", get(api::mood_trends))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
