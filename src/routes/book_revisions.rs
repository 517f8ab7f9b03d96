use crate::{
    error::AppError,
    models::{MessageResponse, NewBookRevision},
    repository,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Appends a revision to a book.
///
/// `book_id`, `title` and `content` are all required; a missing one is a 400.
#[utoipa::path(
    post,
    path = "/book-revisions",
    tag = "book-revisions",
    request_body = NewBookRevision,
    responses(
        (status = 200, description = "Revision created", body = MessageResponse),
        (status = 400, description = "Missing required fields"),
        (status = 404, description = "Unknown book")
    )
)]
#[post("")]
pub async fn create_revision(
    pool: web::Data<PgPool>,
    revision: web::Json<NewBookRevision>,
) -> Result<impl Responder, AppError> {
    revision.validate()?;

    let revision_id = repository::book_revisions::create(
        &**pool,
        revision.book_id,
        &revision.title,
        &revision.content,
    )
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::created(
        "Revision created successfully.",
        revision_id,
    )))
}

/// Lists the revisions of a book, oldest first. A book without revisions is a 404.
#[utoipa::path(
    get,
    path = "/book-revisions/{book_id}",
    tag = "book-revisions",
    params(("book_id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Revisions of the book", body = [crate::models::BookRevision]),
        (status = 404, description = "No revisions found for this book")
    )
)]
#[get("/{book_id}")]
pub async fn get_revisions(
    pool: web::Data<PgPool>,
    book_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let revisions =
        repository::book_revisions::get_by_book_id(&**pool, book_id.into_inner()).await?;

    if revisions.is_empty() {
        return Err(AppError::NotFound("No revisions found for this book.".into()));
    }

    Ok(HttpResponse::Ok().json(revisions))
}
