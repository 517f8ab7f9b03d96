use crate::{
    auth::expiry_after,
    config::JwtSettings,
    error::AppError,
    models::{MessageResponse, NewToken},
    repository,
};
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use chrono::Utc;
use sqlx::PgPool;
use validator::Validate;

/// Stores a token for a user.
///
/// Without `expires_at` the token is kept for the configured token lifetime.
#[utoipa::path(
    post,
    path = "/tokens",
    tag = "tokens",
    request_body = NewToken,
    responses(
        (status = 200, description = "Token saved", body = MessageResponse),
        (status = 400, description = "Missing user_id or token"),
        (status = 404, description = "Unknown user")
    )
)]
#[post("")]
pub async fn save_token(
    pool: web::Data<PgPool>,
    jwt: web::Data<JwtSettings>,
    token_data: web::Json<NewToken>,
) -> Result<impl Responder, AppError> {
    token_data.validate()?;

    let expires_at = match token_data.expires_at {
        Some(expires_at) => expires_at,
        None => expiry_after(Utc::now(), jwt.ttl_seconds)?,
    };

    repository::tokens::save(&**pool, token_data.user_id, &token_data.token, expires_at).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::success("Token saved successfully.")))
}

/// Deletes every token of a user. Deleting when none exist still succeeds.
#[utoipa::path(
    delete,
    path = "/tokens/{user_id}",
    tag = "tokens",
    params(("user_id" = i32, Path, description = "Owner of the tokens")),
    responses((status = 200, description = "Tokens deleted", body = MessageResponse))
)]
#[delete("/{user_id}")]
pub async fn delete_token(
    pool: web::Data<PgPool>,
    user_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let user_id = user_id.into_inner();
    let removed = repository::tokens::delete_for_user(&**pool, user_id).await?;

    log::info!("Deleted {} token(s) of user {}", removed, user_id);

    Ok(HttpResponse::Ok().json(MessageResponse::success("Token deleted successfully.")))
}

/// Tells whether a user holds an unexpired token.
#[utoipa::path(
    get,
    path = "/tokens/{user_id}",
    tag = "tokens",
    params(("user_id" = i32, Path, description = "Owner of the tokens")),
    responses(
        (status = 200, description = "Token exists", body = MessageResponse),
        (status = 404, description = "No unexpired token")
    )
)]
#[get("/{user_id}")]
pub async fn token_exists(
    pool: web::Data<PgPool>,
    user_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    if repository::tokens::exists(&**pool, user_id.into_inner()).await? {
        Ok(HttpResponse::Ok().json(MessageResponse::success("Token exists.")))
    } else {
        Err(AppError::NotFound("Token does not exist.".into()))
    }
}
