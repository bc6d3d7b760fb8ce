//! Member and borrowing endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::member::{BorrowReceipt, BorrowedBook, CreateMember, Member},
    AppState,
};

/// Get a member by id
#[utoipa::path(
    get,
    path = "/members/{memberId}",
    tag = "members",
    params(("memberId" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member", body = Member),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> AppResult<Json<Member>> {
    let member = state.services.members.get_member(member_id).await?;
    Ok(Json(member))
}

/// Register a member
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member created", body = Member),
        (status = 400, description = "Invalid member", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    Json(data): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<Member>)> {
    let member = state.services.members.create_member(data).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// Books borrowed by a member, returned or not
#[utoipa::path(
    get,
    path = "/members/{memberId}/books",
    tag = "members",
    params(("memberId" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Borrowed books", body = Vec<BorrowedBook>)
    )
)]
pub async fn get_member_books(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> AppResult<Json<Vec<BorrowedBook>>> {
    let books = state.services.members.borrowed_books(member_id).await?;
    Ok(Json(books))
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/members/{memberId}/books/{bookId}",
    tag = "members",
    params(
        ("memberId" = i32, Path, description = "Member ID"),
        ("bookId" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 201, description = "Book borrowed", body = BorrowReceipt),
        (status = 404, description = "Member or book not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Book already borrowed", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<AppState>,
    Path((member_id, book_id)): Path<(i32, i32)>,
) -> AppResult<(StatusCode, Json<BorrowReceipt>)> {
    let receipt = state.services.members.borrow_book(member_id, book_id).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/members/{memberId}/books/{bookId}/return",
    tag = "members",
    params(
        ("memberId" = i32, Path, description = "Member ID"),
        ("bookId" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book returned"),
        (status = 404, description = "No open borrowing", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    Path((member_id, book_id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    state.services.members.return_book(member_id, book_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
