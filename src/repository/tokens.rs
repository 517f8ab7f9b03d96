use chrono::{DateTime, Utc};
use sqlx::PgExecutor;

pub async fn save<'e, E>(
    executor: E,
    user_id: i32,
    token: &str,
    expires_at: DateTime<Utc>,
) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query("INSERT INTO tokens (user_id, token, expires_at) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(token)
        .bind(expires_at)
        .execute(executor)
        .await?;

    Ok(())
}

/// Removes every token of a user and returns how many were removed.
pub async fn delete_for_user<'e, E>(executor: E, user_id: i32) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM tokens WHERE user_id = $1")
        .bind(user_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

/// True when the user holds at least one token that has not expired yet.
pub async fn exists<'e, E>(executor: E, user_id: i32) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM tokens WHERE user_id = $1 AND expires_at > NOW())",
    )
    .bind(user_id)
    .fetch_one(executor)
    .await
}
