use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entity::user;

/// Response DTO for the current authenticated user.
#[derive(Serialize, utoipa::ToSchema)]
pub struct MeResponse {
    pub id: i32,
    /// Identity asserted by the external provider.
    #[schema(example = "auth0|507f1f77bcf86cd799439011")]
    pub external_id: String,
    #[schema(example = "alice")]
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<user::Model> for MeResponse {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            external_id: m.external_id,
            username: m.username,
            created_at: m.created_at,
        }
    }
}
