//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, members, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Catalog API",
        version = "0.1.0",
        description = "Books and members catalog backed by stored routines"
    ),
    servers(
        (url = "/api/Library", description = "Library API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Statistics
        stats::get_books_by_published_year,
        stats::get_member_demographics,
        stats::get_books_count_by_genre,
        // Books
        books::get_book,
        books::get_books_by_title,
        books::get_books_by_genre,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Members
        members::get_member,
        members::create_member,
        members::get_member_books,
        members::borrow_book,
        members::return_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookPayload,
            crate::models::book::BookDetails,
            crate::models::book::BookByTitle,
            crate::models::book::BookByGenre,
            crate::models::member::Member,
            crate::models::member::CreateMember,
            crate::models::member::BorrowedBook,
            crate::models::member::BorrowReceipt,
            crate::models::stats::YearCount,
            crate::models::stats::DemographicCount,
            crate::models::stats::GenreCount,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "stats", description = "Aggregates for charts"),
        (name = "books", description = "Book catalog"),
        (name = "members", description = "Members and borrowings")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
