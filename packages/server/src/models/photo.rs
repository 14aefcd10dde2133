use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::hashtag::HashtagResponse;
use crate::entity::{hashtag, photo};

#[derive(Deserialize, utoipa::IntoParams)]
pub struct PhotoListQuery {
    /// Restrict the listing to photos tagged with this exact hashtag name.
    pub hashtag: Option<String>,
}

/// Response DTO for a photo with its attached hashtags.
#[derive(Serialize, utoipa::ToSchema)]
pub struct PhotoResponse {
    pub id: i32,
    pub owner_id: i32,
    #[schema(example = "https://photos.s3.amazonaws.com/6f1c...c2.JPG")]
    pub public_url: String,
    /// Opaque key addressing the object in storage.
    pub s3_key: String,
    pub created_at: DateTime<Utc>,
    pub hashtags: Vec<HashtagResponse>,
}

/// Response DTO for listing photos.
#[derive(Serialize, utoipa::ToSchema)]
pub struct PhotoListResponse {
    pub photos: Vec<PhotoResponse>,
    pub total: u64,
}

pub fn photo_response(photo: photo::Model, hashtags: Vec<hashtag::Model>) -> PhotoResponse {
    PhotoResponse {
        id: photo.id,
        owner_id: photo.owner_id,
        public_url: photo.public_url,
        s3_key: photo.s3_key,
        created_at: photo.created_at,
        hashtags: hashtags.into_iter().map(HashtagResponse::from).collect(),
    }
}

/// Split a comma-separated hashtag list into trimmed names.
///
/// Empty pieces are dropped; order is preserved; duplicates pass through (the
/// hashtag directory collapses them to one row).
pub fn parse_tag_csv(csv: Option<&str>) -> Vec<String> {
    csv.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
