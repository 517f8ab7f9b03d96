pub mod book;
pub mod book_revision;
pub mod external_book;
pub mod library_access;
pub mod token;
pub mod user;

pub use book::{BookContent, BookSummary, BookUpdate, NewBook, RestoreBookRequest};
pub use book_revision::{BookRevision, NewBookRevision};
pub use external_book::{ExternalBookRecord, ExternalBookSearchQuery, NewExternalBook};
pub use library_access::AccessGrant;
pub use token::NewToken;
pub use user::{UserCredentials, UserSummary};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned by mutating endpoints: `{"status": "success", "message": ..., "id": ...}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
    /// Id of the row created by the request, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            id: None,
        }
    }

    pub fn created(message: impl Into<String>, id: i32) -> Self {
        Self {
            id: Some(id),
            ..Self::success(message)
        }
    }
}
