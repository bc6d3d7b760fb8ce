//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, BookByGenre, BookByTitle, BookDetails, BookPayload},
    AppState,
};

/// Get book details by id
#[utoipa::path(
    get,
    path = "/books/{bookId}",
    tag = "books",
    params(("bookId" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookDetails),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<i32>,
) -> AppResult<Json<BookDetails>> {
    let book = state.services.catalog.get_book(book_id).await?;
    Ok(Json(book))
}

/// Find books by exact title
#[utoipa::path(
    get,
    path = "/books/title/{title}",
    tag = "books",
    params(("title" = String, Path, description = "Book title, case-insensitive")),
    responses(
        (status = 200, description = "Matching books", body = Vec<BookByTitle>)
    )
)]
pub async fn get_books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<Vec<BookByTitle>>> {
    let books = state.services.catalog.find_by_title(&title).await?;
    Ok(Json(books))
}

/// List books in a genre
#[utoipa::path(
    get,
    path = "/books/genre/{genre}",
    tag = "books",
    params(("genre" = String, Path, description = "Genre, case-insensitive")),
    responses(
        (status = 200, description = "Books in the genre", body = Vec<BookByGenre>)
    )
)]
pub async fn get_books_by_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> AppResult<Json<Vec<BookByGenre>>> {
    let books = state.services.catalog.find_by_genre(&genre).await?;
    Ok(Json(books))
}

/// Add a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid book", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(data): Json<BookPayload>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.catalog.create_book(data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Replace a book's details
#[utoipa::path(
    put,
    path = "/books/{bookId}",
    tag = "books",
    params(("bookId" = i32, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 204, description = "Book updated"),
        (status = 400, description = "Invalid book", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<i32>,
    Json(data): Json<BookPayload>,
) -> AppResult<StatusCode> {
    state.services.catalog.update_book(book_id, data).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{bookId}",
    tag = "books",
    params(("bookId" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_book(book_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
