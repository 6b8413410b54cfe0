//! SeaORM adapter for the signup gate password.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set};

use crate::entities::signup_passwords;

pub async fn delete_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    let res = signup_passwords::Entity::delete_many().exec(conn).await?;
    Ok(res.rows_affected)
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hash: String,
) -> Result<signup_passwords::Model, sea_orm::DbErr> {
    signup_passwords::ActiveModel {
        id: NotSet,
        hash: Set(hash),
        created_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<signup_passwords::Model>, sea_orm::DbErr> {
    signup_passwords::Entity::find().all(conn).await
}
