//! Shared database configuration and migration infrastructure.
//! Used by the fixture library, its CLI and its tests.

pub mod config;
pub mod error;
pub mod infra;

pub use config::db;
pub use error::DbInfraError;
pub use infra::db::core::{connect, connect_and_migrate, run_migration, sanitize_db_url};
