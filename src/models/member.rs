//! Member model and borrowing projections

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::book::not_blank;

/// Library member
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub member_id: i32,
    pub name: String,
    pub age: i32,
    pub contact: String,
    pub gender: String,
}

/// Register a new member
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMember {
    #[validate(
        custom(function = "not_blank", message = "Name is required"),
        length(max = 2000, message = "Name cannot exceed 2000 characters")
    )]
    pub name: String,
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i32,
    #[serde(default)]
    #[validate(length(max = 2000, message = "Contact cannot exceed 2000 characters"))]
    pub contact: String,
    #[serde(default)]
    #[validate(length(max = 2000, message = "Gender cannot exceed 2000 characters"))]
    pub gender: String,
}

impl CreateMember {
    pub fn into_member(self, member_id: i32) -> Member {
        Member {
            member_id,
            name: self.name,
            age: self.age,
            contact: self.contact,
            gender: self.gender,
        }
    }
}

/// A book borrowed by a member, as returned by `get_books_by_member`
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowedBook {
    pub title: String,
    pub author: String,
    pub borrow_date: DateTime<Utc>,
    /// None while the book is still out
    pub return_date: Option<DateTime<Utc>>,
}

/// Result of a successful borrow
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowReceipt {
    pub borrowing_id: i32,
    pub member_id: i32,
    pub book_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_member_defaults_optional_text() {
        let member: CreateMember = serde_json::from_value(json!({ "name": "Ada", "age": 36 })).unwrap();
        assert!(member.validate().is_ok());
        assert_eq!(member.contact, "");

        let member = member.into_member(4);
        assert_eq!(member.member_id, 4);
        assert_eq!(member.name, "Ada");
    }

    #[test]
    fn test_create_member_rejects_negative_age() {
        let member: CreateMember = serde_json::from_value(json!({ "name": "Bo", "age": -1 })).unwrap();
        assert!(member.validate().unwrap_err().field_errors().contains_key("age"));
    }

    #[test]
    fn test_create_member_rejects_overlong_contact() {
        let member: CreateMember = serde_json::from_value(json!({
            "name": "Cy",
            "age": 40,
            "contact": "c".repeat(2001)
        }))
        .unwrap();
        assert!(member.validate().unwrap_err().field_errors().contains_key("contact"));
    }

    #[test]
    fn test_open_borrowing_serializes_null_return_date() {
        let borrowed = BorrowedBook {
            title: "Beloved".into(),
            author: "Toni Morrison".into(),
            borrow_date: Utc::now(),
            return_date: None,
        };
        let value = serde_json::to_value(&borrowed).unwrap();
        assert!(value["borrowDate"].is_string());
        assert!(value["returnDate"].is_null());
    }
}
