use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Identifier asserted by the external identity provider. Immutable.
    #[sea_orm(unique)]
    pub external_id: String,

    #[sea_orm(unique)]
    pub username: String,

    #[sea_orm(has_many)]
    pub photos: HasMany<super::photo::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
