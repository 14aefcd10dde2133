use sea_orm::prelude::Expr;
use sea_orm::sea_query::{Func, LikeExpr};
use sea_orm::*;

use crate::entity::hashtag;
use crate::error::AppError;
use crate::models::shared::escape_like;

/// Create a hashtag with the given (already validated) name.
///
/// The unique index is the arbiter: no pre-check read, a constraint violation
/// is the conflict signal.
pub async fn create<C: ConnectionTrait>(conn: &C, name: &str) -> Result<hashtag::Model, AppError> {
    let new_tag = hashtag::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };

    match new_tag.insert(conn).await {
        Ok(model) => Ok(model),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            Err(AppError::Conflict("Hashtag already exists".into()))
        }
        Err(e) => Err(e.into()),
    }
}

/// All hashtags, ordered by name.
pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<hashtag::Model>, AppError> {
    Ok(hashtag::Entity::find()
        .order_by_asc(hashtag::Column::Name)
        .all(conn)
        .await?)
}

/// Case-insensitive substring search on hashtag names.
///
/// An empty (or whitespace-only) query matches nothing.
pub async fn search<C: ConnectionTrait>(
    conn: &C,
    query: &str,
) -> Result<Vec<hashtag::Model>, AppError> {
    let term = escape_like(query.trim());
    if term.is_empty() {
        return Ok(Vec::new());
    }

    Ok(hashtag::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col(hashtag::Column::Name)))
                .like(LikeExpr::new(format!("%{}%", term.to_lowercase())).escape('\\')),
        )
        .order_by_asc(hashtag::Column::Name)
        .all(conn)
        .await?)
}

/// Return the hashtag with this exact name, creating it if absent.
///
/// Two requests may race on the insert; the loser re-reads and returns the
/// winner's row, so the same name never yields two rows.
pub async fn get_or_create<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> Result<hashtag::Model, AppError> {
    if let Some(existing) = hashtag::Entity::find()
        .filter(hashtag::Column::Name.eq(name))
        .one(conn)
        .await?
    {
        return Ok(existing);
    }

    let new_tag = hashtag::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };

    match new_tag.insert(conn).await {
        Ok(model) => Ok(model),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            hashtag::Entity::find()
                .filter(hashtag::Column::Name.eq(name))
                .one(conn)
                .await?
                .ok_or_else(|| AppError::Internal("hashtag missing after unique violation".into()))
        }
        Err(e) => Err(e.into()),
    }
}
