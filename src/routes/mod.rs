pub mod book_revisions;
pub mod books;
pub mod external_books;
pub mod health;
pub mod library_access;
pub mod openapi;
pub mod tokens;
pub mod users;

use actix_cors::Cors;
use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::header,
    middleware::DefaultHeaders,
    web, HttpRequest,
};

use crate::error::AppError;

/// Registers every route of the API together with extractor settings that turn
/// malformed bodies, query strings and path segments into JSON errors.
///
/// Expects `web::Data<PgPool>`, `web::Data<JwtSettings>` and `web::Data<CatalogClient>`
/// to be registered on the `App`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(health::health)
        .service(openapi::openapi_json)
        .service(
            web::scope("/users")
                .service(users::list_users)
                .service(users::register)
                .service(users::login),
        )
        .service(
            web::scope("/books")
                .service(books::create_book)
                .service(books::restore_book)
                .service(books::get_books_by_user)
                .service(books::get_book)
                .service(books::update_book)
                .service(books::delete_book),
        )
        .service(
            web::scope("/book-revisions")
                .service(book_revisions::create_revision)
                .service(book_revisions::get_revisions),
        )
        .service(
            web::scope("/external-books")
                .service(external_books::search_external_books)
                .service(external_books::save_external_book),
        )
        .service(
            web::scope("/tokens")
                .service(tokens::save_token)
                .service(tokens::delete_token)
                .service(tokens::token_exists),
        )
        .service(
            web::scope("/user-library-access")
                .service(library_access::grant_access)
                .service(library_access::get_access_list),
        );
}

/// Fully open CORS policy answering `Access-Control-Allow-Origin: *`.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Adds `Access-Control-Allow-Origin: *` to responses the CORS middleware left alone,
/// i.e. requests sent without an `Origin` header. Wrap it outside [`cors`].
pub fn cors_wildcard_header() -> DefaultHeaders {
    DefaultHeaders::new().add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
}

/// Fallback for requests no route matches.
pub async fn not_found() -> Result<&'static str, AppError> {
    Err(AppError::NotFound("Route not found".into()))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid request body: {}", err)).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid query string: {}", err)).into()
}

fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Unparsable path {}: {}", req.path(), err);
    AppError::NotFound("Resource not found".into()).into()
}
