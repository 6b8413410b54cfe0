//! SeaORM adapter for login sessions.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use time::OffsetDateTime;
use ulid::Ulid;

use crate::entities::sessions;

/// Insert a session for `user_id`. The id is a fresh ULID.
pub async fn create_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    expiration_date: OffsetDateTime,
) -> Result<sessions::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    sessions::ActiveModel {
        id: Set(Ulid::new().to_string()),
        user_id: Set(user_id),
        expiration_date: Set(expiration_date),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

pub async fn find_session_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: &str,
) -> Result<Option<sessions::Model>, sea_orm::DbErr> {
    sessions::Entity::find_by_id(session_id.to_string())
        .one(conn)
        .await
}

pub async fn count_sessions_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    sessions::Entity::find()
        .filter(sessions::Column::UserId.eq(user_id))
        .count(conn)
        .await
}
