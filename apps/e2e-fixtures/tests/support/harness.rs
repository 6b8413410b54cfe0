//! Harness over a private, migrated in-memory SQLite database.

use std::sync::Arc;

use db_infra::db::DbSettings;
use e2e_fixtures::entities::{sessions, signup_passwords, users};
use e2e_fixtures::{Argon2Hasher, FixtureConfig, FixtureHarness};
use sea_orm::{EntityTrait, PaginatorTrait};

pub const TEST_SECRET: &str = "e2e_fixture_integration_tests_secret_key_0123";

pub fn test_config() -> FixtureConfig {
    FixtureConfig::new(TEST_SECRET, DbSettings::in_memory())
}

/// Fresh harness with its own database and cheap argon2 params.
pub async fn test_harness() -> FixtureHarness {
    harness_with(test_config()).await
}

pub async fn harness_with(config: FixtureConfig) -> FixtureHarness {
    FixtureHarness::connect(config)
        .await
        .expect("connect and migrate in-memory sqlite")
        .with_hasher(Arc::new(Argon2Hasher::fast()))
}

pub async fn count_users(harness: &FixtureHarness) -> u64 {
    users::Entity::find()
        .count(harness.db())
        .await
        .expect("count users")
}

pub async fn count_sessions(harness: &FixtureHarness) -> u64 {
    sessions::Entity::find()
        .count(harness.db())
        .await
        .expect("count sessions")
}

pub async fn count_signup_passwords(harness: &FixtureHarness) -> u64 {
    signup_passwords::Entity::find()
        .count(harness.db())
        .await
        .expect("count signup passwords")
}
