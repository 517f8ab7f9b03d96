use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Public view of an account, as listed by `GET /users` and the access list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
}

/// Id and bcrypt hash, read when checking a login. Never serialized.
#[derive(Debug, FromRow)]
pub struct UserCredentials {
    pub id: i32,
    pub password: String,
}
