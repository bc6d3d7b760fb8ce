//! API handlers and router for the library REST endpoints

pub mod books;
pub mod health;
pub mod members;
pub mod openapi;
pub mod stats;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::AppState;

/// Prefix every JSON route is mounted under
pub const API_PREFIX: &str = "/api/Library";

/// Build the library API routes
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Statistics
        .route("/books/publishedYear", get(stats::get_books_by_published_year))
        .route("/books/genreCount", get(stats::get_books_count_by_genre))
        .route("/members/demographics", get(stats::get_member_demographics))
        // Books
        .route("/books", post(books::create_book))
        .route(
            "/books/:book_id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route("/books/title/:title", get(books::get_books_by_title))
        .route("/books/genre/:genre", get(books::get_books_by_genre))
        // Members
        .route("/members", post(members::create_member))
        .route("/members/:member_id", get(members::get_member))
        .route("/members/:member_id/books", get(members::get_member_books))
        .route("/members/:member_id/books/:book_id", post(members::borrow_book))
        .route("/members/:member_id/books/:book_id/return", post(members::return_book))
        .with_state(state)
}

/// Create the application router: API, OpenAPI docs and the static client
pub fn create_router(state: AppState) -> Router {
    // The static client may be opened from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.web.static_dir);

    Router::new()
        .nest(API_PREFIX, api_routes(state))
        .merge(openapi::create_openapi_router())
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
