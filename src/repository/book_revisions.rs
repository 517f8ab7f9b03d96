use sqlx::PgExecutor;

use crate::models::BookRevision;

/// Appends a revision. The book must exist (foreign key).
pub async fn create<'e, E>(
    executor: E,
    book_id: i32,
    title: &str,
    content: &str,
) -> Result<i32, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO book_revisions (book_id, title, content) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(book_id)
    .bind(title)
    .bind(content)
    .fetch_one(executor)
    .await
}

/// Revisions of a book in insertion order.
pub async fn get_by_book_id<'e, E>(
    executor: E,
    book_id: i32,
) -> Result<Vec<BookRevision>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, BookRevision>(
        "SELECT id, title, content, created_at FROM book_revisions WHERE book_id = $1 ORDER BY id",
    )
    .bind(book_id)
    .fetch_all(executor)
    .await
}
