use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt;

/// Verified identity extracted from the `Authorization: Bearer <token>` header.
///
/// This is the identity asserted by the external provider, not yet a database
/// user. Handlers resolve it to a `user::Model` via `services::users::resolve`,
/// which creates the user record on first sight.
pub struct AuthIdentity {
    pub external_id: String,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::TokenMissing)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::TokenInvalid)?;

        let claims = jwt::verify(token, &state.config.auth.jwt_secret)
            .map_err(|_| AppError::TokenInvalid)?;

        Ok(AuthIdentity {
            external_id: claims.sub,
            username: claims.username,
        })
    }
}
