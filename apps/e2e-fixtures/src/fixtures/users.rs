//! User factory and credential helpers.

use serde::Serialize;
use tracing::{debug, info};

use crate::adapters::users_sea::{self, UserCreate};
use crate::db::with_txn;
use crate::entities::users;
use crate::error::{FixtureError, NotFoundKind};
use crate::harness::FixtureHarness;

/// Fields of a created user handed back to tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntheticUser {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
}

impl From<users::Model> for SyntheticUser {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            name: model.name,
            email: model.email,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InsertUserOptions {
    /// Plaintext password. Defaults to the generated username.
    pub password: Option<String>,
}

impl InsertUserOptions {
    pub fn with_password(password: impl Into<String>) -> Self {
        Self {
            password: Some(password.into()),
        }
    }
}

impl FixtureHarness {
    /// Create a user plus its password row in one transaction and register
    /// the id for cleanup. Persistence errors (unique violations included)
    /// propagate unchanged and leave nothing registered.
    ///
    /// Without an explicit password the username is the password, so login
    /// form tests can reconstruct it. Test-only convenience.
    pub async fn insert_new_user(
        &self,
        options: InsertUserOptions,
    ) -> Result<SyntheticUser, FixtureError> {
        let data = self.generator.next_user();
        let password = options.password.as_deref().unwrap_or(&data.username);
        let hash = self.hasher.hash(password)?;

        let dto = UserCreate::new(data.username, data.email, hash).with_name(data.name);
        let model = with_txn(&self.db, move |txn| {
            Box::pin(async move {
                Ok::<_, FixtureError>(users_sea::create_user_with_password(txn, dto).await?)
            })
        })
        .await?;

        self.registry.register(model.id);
        info!(user_id = model.id, username = %model.username, "fixture=user_created");
        Ok(model.into())
    }

    /// Look up a user by id. Missing users are a hard `NotFound`.
    pub async fn find_user(&self, user_id: i64) -> Result<SyntheticUser, FixtureError> {
        users_sea::find_user_by_id(&self.db, user_id)
            .await?
            .map(SyntheticUser::from)
            .ok_or_else(|| FixtureError::not_found(NotFoundKind::User, format!("user id {user_id}")))
    }

    /// Delete a user (and by cascade its password and sessions) by username.
    pub async fn delete_user_by_username(&self, username: &str) -> Result<(), FixtureError> {
        let user = users_sea::find_user_by_username(&self.db, username)
            .await?
            .ok_or_else(|| {
                FixtureError::not_found(NotFoundKind::User, format!("username '{username}'"))
            })?;

        users_sea::delete_user_by_username(&self.db, username).await?;
        self.registry.forget(user.id);
        debug!(user_id = user.id, username, "fixture=user_deleted");
        Ok(())
    }

    /// Check `password` against the stored hash for `username`.
    pub async fn verify_user_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, FixtureError> {
        let user = users_sea::find_user_by_username(&self.db, username)
            .await?
            .ok_or_else(|| {
                FixtureError::not_found(NotFoundKind::User, format!("username '{username}'"))
            })?;
        let hash = users_sea::find_password_hash(&self.db, user.id)
            .await?
            .ok_or_else(|| {
                FixtureError::not_found(NotFoundKind::User, format!("password for user id {}", user.id))
            })?;
        self.hasher.verify(password, &hash)
    }
}
