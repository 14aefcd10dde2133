use sea_orm::sea_query::Query as SeaQuery;
use sea_orm::*;

use crate::entity::{hashtag, photo, photo_hashtag};
use crate::error::AppError;
use crate::services::hashtags;

/// Persist a photo and its hashtag associations in one transaction.
///
/// The object behind `s3_key` must already be stored; nothing here touches
/// object storage. Tag names are trimmed, empties dropped, and duplicates
/// collapsed to a single association. On any error the transaction rolls
/// back and no rows are left behind.
pub async fn create(
    db: &DatabaseConnection,
    owner_id: i32,
    public_url: String,
    s3_key: String,
    tag_names: &[String],
) -> Result<(photo::Model, Vec<hashtag::Model>), AppError> {
    let txn = db.begin().await?;

    let mut tags: Vec<hashtag::Model> = Vec::new();
    for name in tag_names {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let tag = hashtags::get_or_create(&txn, name).await?;
        if !tags.iter().any(|t| t.id == tag.id) {
            tags.push(tag);
        }
    }

    let new_photo = photo::ActiveModel {
        owner_id: Set(owner_id),
        public_url: Set(public_url),
        s3_key: Set(s3_key),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    let model = new_photo.insert(&txn).await?;

    for tag in &tags {
        let link = photo_hashtag::ActiveModel {
            photo_id: Set(model.id),
            hashtag_id: Set(tag.id),
        };
        photo_hashtag::Entity::insert(link)
            .exec_without_returning(&txn)
            .await?;
    }

    txn.commit().await?;
    Ok((model, tags))
}

/// All photos owned by `owner_id`, newest first, each with its hashtags.
///
/// With `tag_filter`, only photos associated with the hashtag whose name
/// exactly equals the filter; an unknown tag name yields an empty list.
pub async fn list_for_owner(
    db: &DatabaseConnection,
    owner_id: i32,
    tag_filter: Option<&str>,
) -> Result<Vec<(photo::Model, Vec<hashtag::Model>)>, AppError> {
    let mut select = photo::Entity::find().filter(photo::Column::OwnerId.eq(owner_id));

    if let Some(tag_name) = tag_filter {
        let Some(tag) = hashtag::Entity::find()
            .filter(hashtag::Column::Name.eq(tag_name))
            .one(db)
            .await?
        else {
            return Ok(Vec::new());
        };

        select = select.filter(
            photo::Column::Id.in_subquery(
                SeaQuery::select()
                    .column(photo_hashtag::Column::PhotoId)
                    .from(photo_hashtag::Entity)
                    .and_where(photo_hashtag::Column::HashtagId.eq(tag.id))
                    .to_owned(),
            ),
        );
    }

    Ok(select
        .find_with_related(hashtag::Entity)
        .order_by_desc(photo::Column::CreatedAt)
        .all(db)
        .await?)
}

/// Fetch one photo by id for its owner, with its hashtags.
///
/// A photo owned by someone else is reported exactly like a nonexistent one,
/// so photo ids cannot be probed across accounts.
pub async fn get_for_owner(
    db: &DatabaseConnection,
    owner_id: i32,
    photo_id: i32,
) -> Result<(photo::Model, Vec<hashtag::Model>), AppError> {
    let photo = photo::Entity::find_by_id(photo_id)
        .filter(photo::Column::OwnerId.eq(owner_id))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Photo not found".into()))?;

    let tags = photo.find_related(hashtag::Entity).all(db).await?;
    Ok((photo, tags))
}

/// Delete one photo by id for its owner, cascading its association rows.
///
/// The stored object is preserved. Existence and ownership are checked under
/// the same rule as `get_for_owner`.
pub async fn delete_for_owner(
    db: &DatabaseConnection,
    owner_id: i32,
    photo_id: i32,
) -> Result<(), AppError> {
    let txn = db.begin().await?;

    let photo = photo::Entity::find_by_id(photo_id)
        .filter(photo::Column::OwnerId.eq(owner_id))
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::NotFound("Photo not found".into()))?;

    photo_hashtag::Entity::delete_many()
        .filter(photo_hashtag::Column::PhotoId.eq(photo.id))
        .exec(&txn)
        .await?;
    photo::Entity::delete_by_id(photo.id).exec(&txn).await?;

    txn.commit().await?;
    Ok(())
}
