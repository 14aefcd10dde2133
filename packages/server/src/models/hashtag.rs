use serde::{Deserialize, Serialize};

use crate::entity::hashtag;
use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateHashtagRequest {
    #[schema(example = "sunset")]
    pub name: String,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct HashtagSearchQuery {
    /// Substring to match against hashtag names, case-insensitively.
    pub q: String,
}

/// Response DTO for a hashtag.
#[derive(Serialize, utoipa::ToSchema)]
pub struct HashtagResponse {
    pub id: i32,
    #[schema(example = "sunset")]
    pub name: String,
}

impl From<hashtag::Model> for HashtagResponse {
    fn from(m: hashtag::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}

/// Validate a hashtag name and return it trimmed (1-64 Unicode characters).
pub fn validate_hashtag_name(name: &str) -> Result<&str, AppError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > 64 {
        return Err(AppError::Validation(
            "Hashtag name must be 1-64 characters".into(),
        ));
    }
    Ok(name)
}
