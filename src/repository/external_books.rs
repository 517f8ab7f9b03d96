use sqlx::PgExecutor;

/// Stores a catalog hit for a user. The same `external_id` may be saved twice.
pub async fn save<'e, E>(
    executor: E,
    user_id: i32,
    external_id: &str,
    title: &str,
    description_or_url: Option<&str>,
) -> Result<i32, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO external_books (user_id, external_id, title, description_or_url) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(user_id)
    .bind(external_id)
    .bind(title)
    .bind(description_or_url)
    .fetch_one(executor)
    .await
}
