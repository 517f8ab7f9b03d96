use sqlx::PgExecutor;

use crate::models::{UserCredentials, UserSummary};

/// Inserts a user with an already hashed password and returns its id.
///
/// A duplicate username fails with a unique violation from the database.
pub async fn create<'e, E>(
    executor: E,
    username: &str,
    password_hash: &str,
) -> Result<i32, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO users (username, password) VALUES ($1, $2) RETURNING id",
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(executor)
    .await
}

pub async fn username_exists<'e, E>(executor: E, username: &str) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
        .bind(username)
        .fetch_one(executor)
        .await
}

pub async fn find_credentials<'e, E>(
    executor: E,
    username: &str,
) -> Result<Option<UserCredentials>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, UserCredentials>("SELECT id, password FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(executor)
        .await
}

pub async fn get_all<'e, E>(executor: E) -> Result<Vec<UserSummary>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, UserSummary>("SELECT id, username FROM users ORDER BY id")
        .fetch_all(executor)
        .await
}

pub async fn get_id_by_username<'e, E>(
    executor: E,
    username: &str,
) -> Result<Option<i32>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, i32>("SELECT id FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(executor)
        .await
}
