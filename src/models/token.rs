use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Payload for `POST /tokens`.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewToken {
    pub user_id: i32,
    #[validate(length(min = 1))]
    pub token: String,
    /// Defaults to now plus the configured token lifetime.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}
