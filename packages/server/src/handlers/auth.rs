use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthIdentity;
use crate::models::auth::MeResponse;
use crate::services::users;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/me",
    tag = "Auth",
    operation_id = "me",
    summary = "Get the current authenticated user",
    description = "Resolves the bearer token's identity to its user record, creating the record \
        on the first request for a new external identity.",
    responses(
        (status = 200, description = "Current user", body = MeResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 409, description = "Username taken by another identity (CONFLICT)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, identity), fields(external_id = %identity.external_id))]
pub async fn me(
    identity: AuthIdentity,
    State(state): State<AppState>,
) -> Result<Json<MeResponse>, AppError> {
    let user = users::resolve(&state.db, &identity.external_id, &identity.username).await?;
    Ok(Json(MeResponse::from(user)))
}
