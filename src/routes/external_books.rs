use crate::{
    catalog::CatalogClient,
    error::AppError,
    models::{ExternalBookSearchQuery, MessageResponse, NewExternalBook},
    repository,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Saves a book found in an external catalog to a user's list.
#[utoipa::path(
    post,
    path = "/external-books",
    tag = "external-books",
    request_body = NewExternalBook,
    responses(
        (status = 200, description = "External book saved", body = MessageResponse),
        (status = 400, description = "Missing required fields"),
        (status = 404, description = "Unknown user")
    )
)]
#[post("")]
pub async fn save_external_book(
    pool: web::Data<PgPool>,
    book: web::Json<NewExternalBook>,
) -> Result<impl Responder, AppError> {
    book.validate()?;

    let id = repository::external_books::save(
        &**pool,
        book.user_id,
        &book.external_id,
        &book.title,
        book.description_or_url.as_deref(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::created(
        "External book saved successfully.",
        id,
    )))
}

/// Searches the external catalogs.
///
/// Results of every catalog are merged into one list. A catalog that cannot be reached
/// contributes no results instead of failing the request.
#[utoipa::path(
    get,
    path = "/external-books/search",
    tag = "external-books",
    params(ExternalBookSearchQuery),
    responses(
        (
            status = 200,
            description = "Merged catalog results",
            body = [crate::models::ExternalBookRecord]
        ),
        (status = 400, description = "Missing query")
    )
)]
#[get("/search")]
pub async fn search_external_books(
    catalog: web::Data<CatalogClient>,
    params: web::Query<ExternalBookSearchQuery>,
) -> Result<impl Responder, AppError> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest("Search query is required.".into()));
    }

    let books = catalog.search(query).await;
    Ok(HttpResponse::Ok().json(books))
}
