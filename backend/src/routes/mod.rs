//! Route definitions for the Weather Caption Service

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Caption generation
        .nest("/caption", caption_routes())
        // Weather diary
        .nest("/diary", diary_routes())
}

/// Caption routes
fn caption_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::generate_caption))
        .route("/location", get(handlers::caption_from_location))
        .route("/image", post(handlers::caption_from_image))
}

/// Weather diary routes
fn diary_routes() -> Router<AppState> {
    Router::new()
        .route("/save", post(handlers::save_diary))
        .route("/history", get(handlers::diary_history))
        .route("/:diary_id", get(handlers::get_diary))
        .route("/delete/:diary_id", delete(handlers::delete_diary))
}
