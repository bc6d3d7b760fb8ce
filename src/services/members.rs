//! Member and borrowing service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::member::{BorrowReceipt, BorrowedBook, CreateMember, Member},
    repository::Repository,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get_member(&self, member_id: i32) -> AppResult<Member> {
        self.repository
            .members
            .get_by_id(member_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", member_id)))
    }

    pub async fn create_member(&self, data: CreateMember) -> AppResult<Member> {
        data.validate()?;
        let member_id = self.repository.members.create(&data).await?;
        tracing::info!("Member created: id={}", member_id);
        Ok(data.into_member(member_id))
    }

    /// Books borrowed by a member. An unknown member yields an empty list.
    pub async fn borrowed_books(&self, member_id: i32) -> AppResult<Vec<BorrowedBook>> {
        self.repository.members.get_borrowed_books(member_id).await
    }

    pub async fn borrow_book(&self, member_id: i32, book_id: i32) -> AppResult<BorrowReceipt> {
        let borrowing_id = self.repository.members.borrow_book(member_id, book_id).await?;
        tracing::info!(
            "Book borrowed: borrowing_id={}, member_id={}, book_id={}",
            borrowing_id,
            member_id,
            book_id
        );
        Ok(BorrowReceipt {
            borrowing_id,
            member_id,
            book_id,
        })
    }

    pub async fn return_book(&self, member_id: i32, book_id: i32) -> AppResult<()> {
        if self.repository.members.return_book(member_id, book_id).await? == 0 {
            return Err(AppError::NotFound(format!(
                "No open borrowing of book {} by member {}",
                book_id, member_id
            )));
        }
        tracing::info!("Book returned: member_id={}, book_id={}", member_id, book_id);
        Ok(())
    }
}
