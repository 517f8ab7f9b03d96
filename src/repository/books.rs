use sqlx::PgExecutor;

use crate::models::{BookContent, BookSummary};

pub async fn create<'e, E>(
    executor: E,
    user_id: i32,
    title: &str,
    content: &str,
) -> Result<i32, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO books (user_id, title, content) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(user_id)
    .bind(title)
    .bind(content)
    .fetch_one(executor)
    .await
}

/// Active books of a user, oldest first.
pub async fn get_by_user<'e, E>(executor: E, user_id: i32) -> Result<Vec<BookSummary>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, BookSummary>(
        "SELECT id, title FROM books WHERE user_id = $1 AND is_deleted = FALSE ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}

/// Returns `None` for unknown and soft-deleted books alike.
pub async fn get_by_id<'e, E>(executor: E, book_id: i32) -> Result<Option<BookContent>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, BookContent>(
        "SELECT title, content FROM books WHERE id = $1 AND is_deleted = FALSE",
    )
    .bind(book_id)
    .fetch_optional(executor)
    .await
}

/// Returns whether an active book was updated.
pub async fn update<'e, E>(
    executor: E,
    book_id: i32,
    title: &str,
    content: &str,
) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(
        "UPDATE books SET title = $1, content = $2, updated_at = NOW() \
         WHERE id = $3 AND is_deleted = FALSE",
    )
    .bind(title)
    .bind(content)
    .bind(book_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Soft-deletes an active book. Returns whether a book changed state.
pub async fn delete<'e, E>(executor: E, book_id: i32) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(
        "UPDATE books SET is_deleted = TRUE, deleted_at = NOW() \
         WHERE id = $1 AND is_deleted = FALSE",
    )
    .bind(book_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Brings a soft-deleted book back. Returns whether a book changed state.
pub async fn restore<'e, E>(executor: E, book_id: i32) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(
        "UPDATE books SET is_deleted = FALSE, deleted_at = NULL \
         WHERE id = $1 AND is_deleted = TRUE",
    )
    .bind(book_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}
