//! OpenAPI documentation

use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::routes::{book_revisions, books, external_books, health, library_access, tokens, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Library API",
        version = "1.0.0",
        description = "REST API for managing a personal book library"
    ),
    paths(
        // Health
        health::health,
        // Users
        users::list_users,
        users::register,
        users::login,
        // Books
        books::create_book,
        books::get_books_by_user,
        books::get_book,
        books::update_book,
        books::delete_book,
        books::restore_book,
        // Revisions
        book_revisions::create_revision,
        book_revisions::get_revisions,
        // External books
        external_books::save_external_book,
        external_books::search_external_books,
        // Tokens
        tokens::save_token,
        tokens::delete_token,
        tokens::token_exists,
        // Library access
        library_access::grant_access,
        library_access::get_access_list,
    ),
    components(
        schemas(
            crate::auth::LoginRequest,
            crate::auth::RegisterRequest,
            crate::auth::AuthResponse,
            crate::models::MessageResponse,
            crate::models::UserSummary,
            crate::models::NewBook,
            crate::models::BookUpdate,
            crate::models::RestoreBookRequest,
            crate::models::BookSummary,
            crate::models::BookContent,
            crate::models::NewBookRevision,
            crate::models::BookRevision,
            crate::models::NewExternalBook,
            crate::models::ExternalBookRecord,
            crate::models::NewToken,
            crate::models::AccessGrant,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "users", description = "Registration, login and user listing"),
        (name = "books", description = "Books with soft delete"),
        (name = "book-revisions", description = "Revision history of books"),
        (name = "external-books", description = "External catalog search and saved results"),
        (name = "tokens", description = "Stored authentication tokens"),
        (name = "user-library-access", description = "Library sharing between users")
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document of the whole API.
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
