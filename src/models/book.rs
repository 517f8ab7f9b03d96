use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Payload for `POST /books`.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewBook {
    pub user_id: i32,
    /// Must be between 1 and 255 characters.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub content: String,
}

/// Payload for `PUT /books/{id}`.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct BookUpdate {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub content: String,
}

/// Payload for `POST /books/restore`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RestoreBookRequest {
    pub book_id: i32,
}

/// Entry of a user's book list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookSummary {
    pub id: i32,
    pub title: String,
}

/// A single book as returned by `GET /books/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookContent {
    pub title: String,
    pub content: String,
}
