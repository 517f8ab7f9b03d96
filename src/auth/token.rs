use crate::config::JwtSettings;
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject of the token: the user's id.
    pub sub: i32,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// A freshly signed token together with the instant it stops being valid.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Generates an HS256 JWT for a given user ID.
///
/// The token expires `settings.ttl_seconds` after issuance (one hour by default).
///
/// # Returns
/// The signed token and its expiry instant, or `AppError::InternalServerError`
/// if encoding fails.
pub fn generate_token(user_id: i32, settings: &JwtSettings) -> Result<IssuedToken, AppError> {
    let issued_at = Utc::now();
    let expires_at = expiry_after(issued_at, settings.ttl_seconds)?;

    let claims = Claims {
        sub: user_id,
        iat: issued_at.timestamp(),
        exp: expires_at.timestamp(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(settings.secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))?;

    Ok(IssuedToken { token, expires_at })
}

/// Instant `ttl_seconds` after `from`.
///
/// Fails with `AppError::InternalServerError` when the lifetime is not positive or the
/// result falls outside the representable date range.
pub fn expiry_after(from: DateTime<Utc>, ttl_seconds: i64) -> Result<DateTime<Utc>, AppError> {
    if ttl_seconds <= 0 {
        return Err(AppError::InternalServerError(format!(
            "Token lifetime must be positive, got {}s",
            ttl_seconds
        )));
    }

    Duration::try_seconds(ttl_seconds)
        .and_then(|ttl| from.checked_add_signed(ttl))
        .ok_or_else(|| {
            AppError::InternalServerError(format!("Token lifetime out of range: {}s", ttl_seconds))
        })
}

/// Verifies a JWT string and decodes its claims.
///
/// Signature and expiration are checked by `jsonwebtoken`'s default validation.
///
/// # Returns
/// The decoded `Claims`, or `AppError::Unauthorized` if the token is malformed,
/// signed with another secret, or expired.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;
    Ok(data.claims)
}
