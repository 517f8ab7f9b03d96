use crate::{
    error::AppError,
    models::{BookUpdate, MessageResponse, NewBook, RestoreBookRequest},
    repository,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Creates a new book.
///
/// ## Request Body:
/// - `user_id`: owner of the book.
/// - `title`: 1 to 255 characters.
/// - `content`: the text of the book.
///
/// ## Responses:
/// - `201 Created`: `{"status": "success", "message": ..., "id": <book id>}`.
/// - `400 Bad Request`: missing or invalid fields.
/// - `404 Not Found`: `user_id` does not exist.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book created", body = MessageResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Unknown user")
    )
)]
#[post("")]
pub async fn create_book(
    pool: web::Data<PgPool>,
    book_data: web::Json<NewBook>,
) -> Result<impl Responder, AppError> {
    book_data.validate()?;

    let book_id = repository::books::create(
        &**pool,
        book_data.user_id,
        &book_data.title,
        &book_data.content,
    )
    .await?;

    log::info!("Created book {} for user {}", book_id, book_data.user_id);

    Ok(HttpResponse::Created().json(MessageResponse::created(
        "Book created successfully.",
        book_id,
    )))
}

/// Lists the active books of a user.
///
/// Soft-deleted books are left out. An unknown user simply has no books.
#[utoipa::path(
    get,
    path = "/books/user/{user_id}",
    tag = "books",
    params(("user_id" = i32, Path, description = "Owner of the books")),
    responses(
        (status = 200, description = "Books of the user", body = [crate::models::BookSummary])
    )
)]
#[get("/user/{user_id}")]
pub async fn get_books_by_user(
    pool: web::Data<PgPool>,
    user_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let books = repository::books::get_by_user(&**pool, user_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(books))
}

/// Retrieves the title and content of an active book.
///
/// ## Responses:
/// - `200 OK`: `{"title": ..., "content": ...}`.
/// - `404 Not Found`: the book does not exist or is soft-deleted.
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = crate::models::BookContent),
        (status = 404, description = "Book not found or deleted")
    )
)]
#[get("/{id}")]
pub async fn get_book(
    pool: web::Data<PgPool>,
    book_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    match repository::books::get_by_id(&**pool, book_id.into_inner()).await? {
        Some(book) => Ok(HttpResponse::Ok().json(book)),
        None => Err(AppError::NotFound("Book not found.".into())),
    }
}

/// Replaces the title and content of an active book.
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book id")),
    request_body = BookUpdate,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Book not found or deleted")
    )
)]
#[put("/{id}")]
pub async fn update_book(
    pool: web::Data<PgPool>,
    book_id: web::Path<i32>,
    book_data: web::Json<BookUpdate>,
) -> Result<impl Responder, AppError> {
    book_data.validate()?;
    let book_id = book_id.into_inner();

    if !repository::books::update(&**pool, book_id, &book_data.title, &book_data.content).await? {
        return Err(AppError::NotFound("Book not found.".into()));
    }

    Ok(HttpResponse::Ok().json(MessageResponse::success("Book updated successfully.")))
}

/// Soft-deletes a book. It stays restorable through `POST /books/restore`.
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found or already deleted")
    )
)]
#[delete("/{id}")]
pub async fn delete_book(
    pool: web::Data<PgPool>,
    book_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let book_id = book_id.into_inner();

    if !repository::books::delete(&**pool, book_id).await? {
        return Err(AppError::NotFound("Book not found.".into()));
    }

    log::info!("Soft-deleted book {}", book_id);

    Ok(HttpResponse::Ok().json(MessageResponse::success("Book deleted successfully.")))
}

/// Restores a soft-deleted book.
#[utoipa::path(
    post,
    path = "/books/restore",
    tag = "books",
    request_body = RestoreBookRequest,
    responses(
        (status = 200, description = "Book restored", body = MessageResponse),
        (status = 400, description = "Missing book_id"),
        (status = 404, description = "No deleted book with this id")
    )
)]
#[post("/restore")]
pub async fn restore_book(
    pool: web::Data<PgPool>,
    restore_data: web::Json<RestoreBookRequest>,
) -> Result<impl Responder, AppError> {
    let book_id = restore_data.book_id;

    if !repository::books::restore(&**pool, book_id).await? {
        return Err(AppError::NotFound("No deleted book with this id.".into()));
    }

    log::info!("Restored book {}", book_id);

    Ok(HttpResponse::Ok().json(MessageResponse::success("Book restored successfully.")))
}
