use sqlx::PgExecutor;

use crate::models::UserSummary;

/// Grants `access_user_id` access to the library of `owner_user_id`.
///
/// Granting twice is a no-op; the return value tells whether a new grant was stored.
pub async fn grant<'e, E>(
    executor: E,
    owner_user_id: i32,
    access_user_id: i32,
) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(
        "INSERT INTO user_library_access (owner_user_id, access_user_id) VALUES ($1, $2) \
         ON CONFLICT (owner_user_id, access_user_id) DO NOTHING",
    )
    .bind(owner_user_id)
    .bind(access_user_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Users the owner has shared their library with.
pub async fn get_access_list<'e, E>(
    executor: E,
    owner_user_id: i32,
) -> Result<Vec<UserSummary>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, UserSummary>(
        "SELECT u.id, u.username FROM user_library_access ula \
         JOIN users u ON ula.access_user_id = u.id \
         WHERE ula.owner_user_id = $1 \
         ORDER BY u.id",
    )
    .bind(owner_user_id)
    .fetch_all(executor)
    .await
}
