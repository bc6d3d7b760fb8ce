//! Catalog service for book lookups and maintenance

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookByGenre, BookByTitle, BookDetails, BookPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get_book(&self, book_id: i32) -> AppResult<BookDetails> {
        tracing::debug!("Fetching book details for id={}", book_id);
        self.repository
            .books
            .get_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))
    }

    pub async fn find_by_title(&self, title: &str) -> AppResult<Vec<BookByTitle>> {
        tracing::debug!("Searching books by title: {}", title);
        self.repository.books.get_by_title(title).await
    }

    pub async fn find_by_genre(&self, genre: &str) -> AppResult<Vec<BookByGenre>> {
        tracing::debug!("Searching books by genre: {}", genre);
        self.repository.books.get_by_genre(genre).await
    }

    /// Add a book and return it with its assigned id
    pub async fn create_book(&self, data: BookPayload) -> AppResult<Book> {
        data.validate()?;
        let book_id = self.repository.books.create(&data).await?;
        tracing::info!("Book created: id={}, title={}", book_id, data.title);
        Ok(data.into_book(book_id))
    }

    pub async fn update_book(&self, book_id: i32, data: BookPayload) -> AppResult<()> {
        data.validate()?;
        if self.repository.books.update(book_id, &data).await? == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", book_id)));
        }
        tracing::info!("Book updated: id={}", book_id);
        Ok(())
    }

    pub async fn delete_book(&self, book_id: i32) -> AppResult<()> {
        if self.repository.books.delete(book_id).await? == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", book_id)));
        }
        tracing::info!("Book deleted: id={}", book_id);
        Ok(())
    }
}
