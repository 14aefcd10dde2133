use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthIdentity;
use crate::extractors::json::AppJson;
use crate::models::hashtag::{
    CreateHashtagRequest, HashtagResponse, HashtagSearchQuery, validate_hashtag_name,
};
use crate::services::hashtags;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Hashtags",
    operation_id = "createHashtag",
    summary = "Create a new hashtag",
    description = "Creates a hashtag with a unique name. Name uniqueness is case-sensitive.",
    request_body = CreateHashtagRequest,
    responses(
        (status = 201, description = "Hashtag created", body = HashtagResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 409, description = "Hashtag already exists (CONFLICT)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _identity, payload), fields(name = %payload.name))]
pub async fn create_hashtag(
    _identity: AuthIdentity,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateHashtagRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = validate_hashtag_name(&payload.name)?;

    let model = hashtags::create(&state.db, name).await?;

    Ok((StatusCode::CREATED, Json(HashtagResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Hashtags",
    operation_id = "listHashtags",
    summary = "List all hashtags",
    responses(
        (status = 200, description = "All hashtags", body = Vec<HashtagResponse>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _identity))]
pub async fn list_hashtags(
    _identity: AuthIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<HashtagResponse>>, AppError> {
    let tags = hashtags::list(&state.db).await?;
    Ok(Json(tags.into_iter().map(HashtagResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "Hashtags",
    operation_id = "searchHashtags",
    summary = "Search hashtags by substring",
    description = "Case-insensitive substring match on hashtag names. An empty query matches \
        nothing.",
    params(HashtagSearchQuery),
    responses(
        (status = 200, description = "Matching hashtags", body = Vec<HashtagResponse>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _identity, query))]
pub async fn search_hashtags(
    _identity: AuthIdentity,
    State(state): State<AppState>,
    Query(query): Query<HashtagSearchQuery>,
) -> Result<Json<Vec<HashtagResponse>>, AppError> {
    let tags = hashtags::search(&state.db, &query.q).await?;
    Ok(Json(tags.into_iter().map(HashtagResponse::from).collect()))
}
