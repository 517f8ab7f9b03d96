use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload for `POST /user-library-access`: `owner_user_id` shares their library
/// with `access_user_id`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccessGrant {
    pub owner_user_id: i32,
    pub access_user_id: i32,
}

impl AccessGrant {
    pub fn is_self_grant(&self) -> bool {
        self.owner_user_id == self.access_user_id
    }
}
