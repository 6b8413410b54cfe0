#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! End-to-end test fixtures: throwaway users, forged authenticated sessions
//! and guaranteed cleanup for browser-driven tests of the application.

pub mod adapters;
pub mod auth;
pub mod browser;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod telemetry;

pub use auth::{Argon2Hasher, CredentialHasher};
pub use browser::{BrowserContext, BrowserCookie, BrowserError, CookieSameSite, JarContext};
pub use config::FixtureConfig;
pub use error::{FixtureError, NotFoundKind};
pub use fixtures::{
    CleanupRegistry, InsertUserOptions, LoginOptions, SyntheticUser, UserDataGenerator,
    SESSION_TTL, SIGNUP_PASSWORD_PHRASE,
};
pub use harness::FixtureHarness;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
