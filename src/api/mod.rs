//! API handlers for Bookshelf endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    routing::{any, delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.web.static_dir);

    Router::new()
        // Listing page
        .route("/", get(books::index))
        // Working set
        .route("/add", post(books::add_book).fallback(books::method_not_allowed))
        .route("/update", put(books::update_book).fallback(books::method_not_allowed))
        .route("/delete", delete(books::delete_book).fallback(books::method_not_allowed))
        .route("/reset", any(books::reset_books))
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .merge(openapi::create_openapi_router())
        .nest_service("/static", static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
