//! Books repository: every call goes through a `library_api` routine

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{BookByGenre, BookByTitle, BookDetails, BookPayload},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get book details by id, None when the routine returns no row
    pub async fn get_by_id(&self, book_id: i32) -> AppResult<Option<BookDetails>> {
        let row = sqlx::query_as::<_, BookDetails>(
            "SELECT * FROM library_api.get_book_details_by_id($1)",
        )
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Books whose title matches exactly, ignoring case
    pub async fn get_by_title(&self, title: &str) -> AppResult<Vec<BookByTitle>> {
        let rows = sqlx::query_as::<_, BookByTitle>(
            "SELECT * FROM library_api.get_book_details_by_title($1)",
        )
        .bind(title)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Books in a genre, ignoring case
    pub async fn get_by_genre(&self, genre: &str) -> AppResult<Vec<BookByGenre>> {
        let rows = sqlx::query_as::<_, BookByGenre>(
            "SELECT * FROM library_api.get_book_details_by_genre($1)",
        )
        .bind(genre)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a book and return its new id
    pub async fn create(&self, data: &BookPayload) -> AppResult<i32> {
        let book_id: i32 = sqlx::query_scalar(
            "SELECT library_api.add_book($1, $2, $3, $4, $5)",
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.genre)
        .bind(data.published_year)
        .bind(data.rating)
        .fetch_one(&self.pool)
        .await?;
        Ok(book_id)
    }

    /// Replace every column of a book, returning the number of rows updated
    pub async fn update(&self, book_id: i32, data: &BookPayload) -> AppResult<i32> {
        let updated: i32 = sqlx::query_scalar(
            "SELECT library_api.update_book($1, $2, $3, $4, $5, $6)",
        )
        .bind(book_id)
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.genre)
        .bind(data.published_year)
        .bind(data.rating)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    /// Delete a book and its borrowing history, returning the number of books removed
    pub async fn delete(&self, book_id: i32) -> AppResult<i32> {
        let deleted: i32 = sqlx::query_scalar("SELECT library_api.delete_book($1)")
            .bind(book_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(deleted)
    }
}
