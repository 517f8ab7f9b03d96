use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Payload for `POST /book-revisions`.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewBookRevision {
    pub book_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub content: String,
}

/// A stored snapshot of a book. Revisions are append-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookRevision {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
