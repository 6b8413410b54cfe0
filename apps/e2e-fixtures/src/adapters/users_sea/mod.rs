//! SeaORM adapter for users and their passwords.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, Set,
};

use crate::entities::{passwords, users};

pub mod dto;

pub use dto::UserCreate;

/// Insert a user and its password row. Callers own the transaction so the
/// pair commits or rolls back together.
pub async fn create_user_with_password(
    txn: &DatabaseTransaction,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let user = users::ActiveModel {
        id: NotSet,
        email: Set(dto.email),
        username: Set(dto.username),
        name: Set(dto.name),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(txn)
    .await?;

    passwords::Entity::insert(passwords::ActiveModel {
        user_id: Set(user.id),
        hash: Set(dto.password_hash),
    })
    .exec_without_returning(txn)
    .await?;

    Ok(user)
}

pub async fn find_user_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

pub async fn find_user_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(conn)
        .await
}

pub async fn find_password_hash<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<String>, sea_orm::DbErr> {
    Ok(passwords::Entity::find_by_id(user_id)
        .one(conn)
        .await?
        .map(|p| p.hash))
}

/// Delete one user by username. Errors with `RecordNotFound` when absent.
pub async fn delete_user_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<(), sea_orm::DbErr> {
    let res = users::Entity::delete_many()
        .filter(users::Column::Username.eq(username))
        .exec(conn)
        .await?;
    if res.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound(format!(
            "users.username '{username}' not found"
        )));
    }
    Ok(())
}

/// Batch delete keyed by `id IN (...)`. Returns the number of rows removed.
pub async fn delete_users_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[i64],
) -> Result<u64, sea_orm::DbErr> {
    let res = users::Entity::delete_many()
        .filter(users::Column::Id.is_in(ids.iter().copied()))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
