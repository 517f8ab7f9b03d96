use crate::{
    error::AppError,
    models::{AccessGrant, MessageResponse},
    repository,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use sqlx::PgPool;

/// Shares the owner's library with another user. Repeating a grant is harmless.
#[utoipa::path(
    post,
    path = "/user-library-access",
    tag = "user-library-access",
    request_body = AccessGrant,
    responses(
        (status = 200, description = "Access granted", body = MessageResponse),
        (status = 400, description = "Missing fields or self-grant"),
        (status = 404, description = "Unknown user")
    )
)]
#[post("")]
pub async fn grant_access(
    pool: web::Data<PgPool>,
    grant: web::Json<AccessGrant>,
) -> Result<impl Responder, AppError> {
    if grant.is_self_grant() {
        return Err(AppError::BadRequest(
            "A user cannot grant access to their own library.".into(),
        ));
    }

    let created =
        repository::library_access::grant(&**pool, grant.owner_user_id, grant.access_user_id)
            .await?;

    if created {
        log::info!(
            "User {} shared their library with user {}",
            grant.owner_user_id,
            grant.access_user_id
        );
    }

    Ok(HttpResponse::Ok().json(MessageResponse::success("Access granted successfully.")))
}

/// Lists the users an owner has shared their library with.
#[utoipa::path(
    get,
    path = "/user-library-access/{owner_user_id}",
    tag = "user-library-access",
    params(("owner_user_id" = i32, Path, description = "Owner of the library")),
    responses(
        (status = 200, description = "Users with access", body = [crate::models::UserSummary])
    )
)]
#[get("/{owner_user_id}")]
pub async fn get_access_list(
    pool: web::Data<PgPool>,
    owner_user_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let users =
        repository::library_access::get_access_list(&**pool, owner_user_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(users))
}
