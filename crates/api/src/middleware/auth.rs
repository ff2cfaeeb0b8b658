//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use rentledger_core::error::CoreError;
use rentledger_core::types::DbId;
use rentledger_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated landlord resolved from a JWT Bearer token in the
/// `Authorization` header.
///
/// Validation and user resolution happen before any handler body runs, so a
/// missing or invalid identity aborts the request with 401 before any other
/// check. On the first request for a verified email the corresponding `users`
/// row is created (the identity provider adapter's "first login" contract).
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The landlord's internal database id.
    pub user_id: DbId,
    /// Verified email address from the identity token.
    pub email: String,
    /// Display name from the identity token.
    pub name: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let user = UserRepo::find_or_create(&state.pool, &claims.email, &claims.name).await?;

        Ok(AuthUser {
            user_id: user.id,
            email: user.email,
            name: user.name,
        })
    }
}
