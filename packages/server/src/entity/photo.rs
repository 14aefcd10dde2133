use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "photo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub owner_id: i32,
    #[sea_orm(belongs_to, from = "owner_id", to = "id")]
    pub owner: HasOne<super::user::Entity>,

    /// Resolvable URL of the stored object, derived at upload time and kept
    /// for fast reads.
    pub public_url: String,

    /// Opaque key addressing the object in the store.
    pub s3_key: String,

    #[sea_orm(has_many, via = "photo_hashtag")]
    pub hashtags: HasMany<super::hashtag::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
