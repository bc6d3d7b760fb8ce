//! Book model and the projections returned by the book lookup routines

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Book row as stored in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub book_id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    /// Rating between 0 and 5
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub rating: Decimal,
}

/// Create or replace a book. PUT replaces every column, so all fields are required.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[validate(
        custom(function = "not_blank", message = "Title is required"),
        length(max = 2000, message = "Title cannot exceed 2000 characters")
    )]
    pub title: String,
    #[validate(
        custom(function = "not_blank", message = "Author is required"),
        length(max = 2000, message = "Author cannot exceed 2000 characters")
    )]
    pub author: String,
    #[validate(
        custom(function = "not_blank", message = "Genre is required"),
        length(max = 2000, message = "Genre cannot exceed 2000 characters")
    )]
    pub genre: String,
    #[validate(range(min = 0, message = "Published year cannot be negative"))]
    pub published_year: i32,
    #[validate(custom(function = "rating_in_range"))]
    #[schema(value_type = f64)]
    pub rating: Decimal,
}

impl BookPayload {
    /// Build the stored row once the routine has assigned an id
    pub fn into_book(self, book_id: i32) -> Book {
        Book {
            book_id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            published_year: self.published_year,
            rating: self.rating,
        }
    }
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn rating_in_range(rating: &Decimal) -> Result<(), ValidationError> {
    if *rating < Decimal::ZERO || *rating > Decimal::from(5) {
        let mut err = ValidationError::new("range");
        err.message = Some("Rating must be between 0 and 5".into());
        return Err(err);
    }
    // Stored as NUMERIC(4,2)
    if rating.normalize().scale() > 2 {
        let mut err = ValidationError::new("scale");
        err.message = Some("Rating cannot have more than 2 decimal places".into());
        return Err(err);
    }
    Ok(())
}

/// `get_book_details_by_id` row
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDetails {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub rating: Decimal,
}

/// `get_book_details_by_title` row
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookByTitle {
    pub book_id: i32,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub rating: Decimal,
}

/// `get_book_details_by_genre` row
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookByGenre {
    pub book_id: i32,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub rating: Decimal,
}
