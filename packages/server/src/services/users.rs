use sea_orm::*;

use crate::entity::user;
use crate::error::AppError;

/// Resolve an external identity to its user record, creating one on first
/// sight.
///
/// An existing user is returned unchanged; the username carried by the token
/// never overwrites a stored one. Uniqueness is left to the database: on a
/// constraint violation we re-read by external id, so losing a race against
/// the same identity still resolves, while a username collision with a
/// different user surfaces as a conflict.
pub async fn resolve<C: ConnectionTrait>(
    conn: &C,
    external_id: &str,
    username: &str,
) -> Result<user::Model, AppError> {
    if let Some(existing) = user::Entity::find()
        .filter(user::Column::ExternalId.eq(external_id))
        .one(conn)
        .await?
    {
        return Ok(existing);
    }

    let new_user = user::ActiveModel {
        external_id: Set(external_id.to_string()),
        username: Set(username.to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    match new_user.insert(conn).await {
        Ok(model) => Ok(model),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            user::Entity::find()
                .filter(user::Column::ExternalId.eq(external_id))
                .one(conn)
                .await?
                .ok_or_else(|| AppError::Conflict("Username is already taken".into()))
        }
        Err(e) => Err(e.into()),
    }
}
