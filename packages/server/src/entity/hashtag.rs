use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hashtag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Unique tag name. Uniqueness is case-sensitive; search is not.
    #[sea_orm(unique)]
    pub name: String,

    #[sea_orm(has_many, via = "photo_hashtag")]
    pub photos: HasMany<super::photo::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
