use axum::Json;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthIdentity;
use crate::models::hashtag::validate_hashtag_name;
use crate::models::photo::{
    PhotoListQuery, PhotoListResponse, PhotoResponse, parse_tag_csv, photo_response,
};
use crate::services::{photos, users};
use crate::state::AppState;
use crate::utils::filename::storage_key;

pub fn upload_body_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max(64 * 1024 * 1024) // 64 MB
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Photos",
    operation_id = "uploadPhoto",
    summary = "Upload a photo",
    description = "Uploads a photo to object storage and records it. The `file` multipart field \
        is required. An optional `hashtags` field carries a comma-separated tag list; tags are \
        created on first use and duplicates collapse to one association.",
    request_body(content_type = "multipart/form-data", description = "File upload with optional hashtags"),
    responses(
        (status = 201, description = "Photo created", body = PhotoResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 502, description = "Object storage failure (STORAGE_ERROR)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, identity, multipart), fields(external_id = %identity.external_id))]
pub async fn upload_photo(
    identity: AuthIdentity,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let owner = users::resolve(&state.db, &identity.external_id, &identity.username).await?;

    let mut file_bytes: Option<Bytes> = None;
    let mut file_name: Option<String> = None;
    let mut tags_csv: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        match field.name() {
            Some("file") => {
                file_name = field.file_name().map(|s| s.to_string());
                file_bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("Upload read error: {e}")))?,
                );
            }
            Some("hashtags") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read hashtags: {e}")))?;
                tags_csv = Some(text);
            }
            _ => {} // Ignore unknown fields.
        }
    }

    let data = file_bytes.ok_or_else(|| AppError::Validation("Missing 'file' field".into()))?;
    let filename =
        file_name.ok_or_else(|| AppError::Validation("File field must have a filename".into()))?;

    let tag_names = parse_tag_csv(tags_csv.as_deref());
    for name in &tag_names {
        validate_hashtag_name(name)?;
    }

    // Store-before-record: the object must be durable before any row
    // references its key. A failure past this point leaves an orphaned
    // object, never a photo row with a missing object.
    let key = storage_key(&filename);
    state.store.put(&key, &data).await?;
    let public_url = state.store.public_url(&key);

    let (model, tags) = photos::create(&state.db, owner.id, public_url, key, &tag_names).await?;

    Ok((StatusCode::CREATED, Json(photo_response(model, tags))))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Photos",
    operation_id = "listPhotos",
    summary = "List the caller's photos",
    description = "Returns all photos owned by the caller, newest first. With `hashtag`, only \
        photos tagged with that exact name; an unknown name yields an empty list.",
    params(PhotoListQuery),
    responses(
        (status = 200, description = "Photo list", body = PhotoListResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, identity, query), fields(external_id = %identity.external_id))]
pub async fn list_photos(
    identity: AuthIdentity,
    State(state): State<AppState>,
    Query(query): Query<PhotoListQuery>,
) -> Result<Json<PhotoListResponse>, AppError> {
    let owner = users::resolve(&state.db, &identity.external_id, &identity.username).await?;

    let rows = photos::list_for_owner(&state.db, owner.id, query.hashtag.as_deref()).await?;

    let total = rows.len() as u64;
    let photos = rows
        .into_iter()
        .map(|(p, tags)| photo_response(p, tags))
        .collect();

    Ok(Json(PhotoListResponse { photos, total }))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Photos",
    operation_id = "getPhoto",
    summary = "Get one of the caller's photos",
    description = "Returns a photo owned by the caller. A photo owned by another user is \
        reported as 404, not 403, so ids cannot be probed.",
    params(("id" = i32, Path, description = "Photo ID")),
    responses(
        (status = 200, description = "Photo details", body = PhotoResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Photo not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, identity), fields(external_id = %identity.external_id, photo_id))]
pub async fn get_photo(
    identity: AuthIdentity,
    State(state): State<AppState>,
    Path(photo_id): Path<i32>,
) -> Result<Json<PhotoResponse>, AppError> {
    let owner = users::resolve(&state.db, &identity.external_id, &identity.username).await?;

    let (model, tags) = photos::get_for_owner(&state.db, owner.id, photo_id).await?;
    Ok(Json(photo_response(model, tags)))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Photos",
    operation_id = "deletePhoto",
    summary = "Delete one of the caller's photos",
    description = "Removes the photo record and its hashtag associations. The stored object is \
        preserved. Same 404 rule as getting a photo.",
    params(("id" = i32, Path, description = "Photo ID")),
    responses(
        (status = 204, description = "Photo deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Photo not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, identity), fields(external_id = %identity.external_id, photo_id))]
pub async fn delete_photo(
    identity: AuthIdentity,
    State(state): State<AppState>,
    Path(photo_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = users::resolve(&state.db, &identity.external_id, &identity.username).await?;

    photos::delete_for_owner(&state.db, owner.id, photo_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
