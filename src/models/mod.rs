//! Data models for the library catalog

pub mod book;
pub mod member;
pub mod stats;

// Re-export commonly used types
pub use book::{Book, BookByGenre, BookByTitle, BookDetails, BookPayload};
pub use member::{BorrowReceipt, BorrowedBook, CreateMember, Member};
pub use stats::{DemographicCount, GenreCount, YearCount};
