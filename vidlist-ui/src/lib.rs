//! vidlist-ui library - catalog web service
//!
//! JSON API plus embedded single-page UI for the video catalog.

use axum::Router;
use sqlx::SqlitePool;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;
    use tower_http::cors::CorsLayer;

    Router::new()
        .route("/api/videos", get(api::list_videos).post(api::add_video))
        .route("/api/videos/:video_id", get(api::video_detail))
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
