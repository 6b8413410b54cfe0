//! Test-lifecycle owner of every fixture collaborator.
//!
//! One harness per test process (or per test). Fixture operations live on it
//! as methods (see `fixtures::*`); [`FixtureHarness::scope`] is the after-each
//! hook with a flush guaranteed on every exit path.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use sea_orm::DatabaseConnection;
use session_cookie::SessionCookieCodec;
use tracing::{error, warn};

use crate::auth::{Argon2Hasher, CredentialHasher};
use crate::config::FixtureConfig;
use crate::error::FixtureError;
use crate::fixtures::cleanup::CleanupRegistry;
use crate::fixtures::generator::UserDataGenerator;

pub struct FixtureHarness {
    pub(crate) db: DatabaseConnection,
    pub(crate) config: FixtureConfig,
    pub(crate) codec: SessionCookieCodec,
    pub(crate) hasher: Arc<dyn CredentialHasher>,
    pub(crate) generator: UserDataGenerator,
    pub(crate) registry: CleanupRegistry,
}

impl FixtureHarness {
    /// Build over an already-migrated connection.
    pub fn new(db: DatabaseConnection, config: FixtureConfig) -> Result<Self, FixtureError> {
        let codec = config.session_codec()?;
        Ok(Self {
            db,
            config,
            codec,
            hasher: Arc::new(Argon2Hasher::default()),
            generator: UserDataGenerator::default(),
            registry: CleanupRegistry::new(),
        })
    }

    /// Connect (migrating if needed) using `config.database`.
    pub async fn connect(config: FixtureConfig) -> Result<Self, FixtureError> {
        let db = db_infra::connect_and_migrate(&config.database).await?;
        Self::new(db, config)
    }

    pub async fn from_env() -> Result<Self, FixtureError> {
        Self::connect(FixtureConfig::from_env()?).await
    }

    pub fn with_hasher(mut self, hasher: Arc<dyn CredentialHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn with_generator(mut self, generator: UserDataGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    pub fn codec(&self) -> &SessionCookieCodec {
        &self.codec
    }

    pub fn hasher(&self) -> &dyn CredentialHasher {
        self.hasher.as_ref()
    }

    pub fn registry(&self) -> &CleanupRegistry {
        &self.registry
    }

    /// Delete every user created through this harness so far.
    pub async fn flush(&self) -> Result<u64, FixtureError> {
        self.registry.flush(&self.db).await
    }

    /// Run one test body, then flush the registry whether it returned `Ok`,
    /// `Err` or panicked. Panics resume after the flush. A flush failure fails
    /// an otherwise passing test; after a failed test it is logged and the
    /// test's own error wins.
    pub async fn scope<'h, F, Fut, T>(&'h self, f: F) -> Result<T, FixtureError>
    where
        F: FnOnce(&'h Self) -> Fut,
        Fut: Future<Output = Result<T, FixtureError>>,
    {
        let outcome = AssertUnwindSafe(f(self)).catch_unwind().await;

        match outcome {
            Ok(Ok(value)) => {
                self.flush().await?;
                Ok(value)
            }
            Ok(Err(err)) => {
                if let Err(flush_err) = self.flush().await {
                    warn!(error = %flush_err, "cleanup failed after test error");
                }
                Err(err)
            }
            Err(panic) => {
                if let Err(flush_err) = self.flush().await {
                    error!(error = %flush_err, "cleanup failed after test panic");
                }
                std::panic::resume_unwind(panic)
            }
        }
    }
}
