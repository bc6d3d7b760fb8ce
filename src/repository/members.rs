//! Members repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::member::{BorrowedBook, CreateMember, Member},
};

/// SQLSTATE raised by `borrow_book` for an unknown member or book
const NO_DATA_FOUND: &str = "P0002";
/// SQLSTATE for the open-borrowing unique index
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Postgres>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, member_id: i32) -> AppResult<Option<Member>> {
        let row = sqlx::query_as::<_, Member>("SELECT * FROM library_api.get_member_by_id($1)")
            .bind(member_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert a member and return its new id
    pub async fn create(&self, data: &CreateMember) -> AppResult<i32> {
        let member_id: i32 = sqlx::query_scalar("SELECT library_api.add_member($1, $2, $3, $4)")
            .bind(&data.name)
            .bind(data.age)
            .bind(&data.contact)
            .bind(&data.gender)
            .fetch_one(&self.pool)
            .await?;
        Ok(member_id)
    }

    /// Books borrowed by a member, oldest borrowing first
    pub async fn get_borrowed_books(&self, member_id: i32) -> AppResult<Vec<BorrowedBook>> {
        let rows = sqlx::query_as::<_, BorrowedBook>(
            "SELECT * FROM library_api.get_books_by_member($1)",
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Open a borrowing, returning its id
    pub async fn borrow_book(&self, member_id: i32, book_id: i32) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>("SELECT library_api.borrow_book($1, $2)")
            .bind(member_id)
            .bind(book_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.code().as_deref() == Some(NO_DATA_FOUND) => {
                    AppError::NotFound(db.message().to_string())
                }
                sqlx::Error::Database(ref db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                    AppError::Conflict(format!("Book {} is already borrowed", book_id))
                }
                other => AppError::Database(other),
            })
    }

    /// Close the open borrowing of a book by a member, returning rows updated
    pub async fn return_book(&self, member_id: i32, book_id: i32) -> AppResult<i32> {
        let updated: i32 = sqlx::query_scalar("SELECT library_api.return_book($1, $2)")
            .bind(member_id)
            .bind(book_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(updated)
    }
}
