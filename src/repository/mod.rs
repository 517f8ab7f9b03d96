//! Data accessors, one module per table.
//!
//! Every function takes any `sqlx::PgExecutor`, so the same accessor runs against the
//! shared pool or inside a transaction. Accessors return `sqlx::Error` untouched;
//! mapping to HTTP statuses and logging happen in the handler layer.

pub mod book_revisions;
pub mod books;
pub mod external_books;
pub mod library_access;
pub mod tokens;
pub mod users;
