use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pure link table between photos and hashtags.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "photo_hashtag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub photo_id: i32,
    #[sea_orm(primary_key)]
    pub hashtag_id: i32,
    #[sea_orm(belongs_to, from = "photo_id", to = "id")]
    pub photo: HasOne<super::photo::Entity>,
    #[sea_orm(belongs_to, from = "hashtag_id", to = "id")]
    pub hashtag: HasOne<super::hashtag::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
