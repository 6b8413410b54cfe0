use std::env;

use crate::error::DbInfraError;

/// Which engine a connection URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl DbKind {
    /// Classify a connection URL by its scheme.
    pub fn from_url(url: &str) -> Result<Self, DbInfraError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(DbKind::Postgres)
        } else if url.starts_with("sqlite:") {
            if url.contains(":memory:") || url.contains("mode=memory") {
                Ok(DbKind::SqliteMemory)
            } else {
                Ok(DbKind::SqliteFile)
            }
        } else {
            Err(DbInfraError::config(format!(
                "unsupported database URL scheme: '{}'",
                crate::sanitize_db_url(url)
            )))
        }
    }

    pub fn engine(self) -> &'static str {
        match self {
            DbKind::Postgres => "postgresql",
            DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
        }
    }
}

impl From<DbKind> for sea_orm::DatabaseBackend {
    fn from(kind: DbKind) -> Self {
        match kind {
            DbKind::Postgres => sea_orm::DatabaseBackend::Postgres,
            DbKind::SqliteFile | DbKind::SqliteMemory => sea_orm::DatabaseBackend::Sqlite,
        }
    }
}

/// Connection settings for the fixture database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub url: String,
    pub kind: DbKind,
    pub max_connections: u32,
    pub connect_attempts: u32,
    pub retry_interval_ms: u64,
}

impl DbSettings {
    pub fn new(url: impl Into<String>) -> Result<Self, DbInfraError> {
        let url = url.into();
        let kind = DbKind::from_url(&url)?;
        // every pooled connection to :memory: would see its own empty database
        let max_connections = if kind == DbKind::SqliteMemory { 1 } else { 5 };
        Ok(Self {
            url,
            kind,
            max_connections,
            connect_attempts: if kind == DbKind::Postgres { 5 } else { 1 },
            retry_interval_ms: 500,
        })
    }

    /// Private in-memory SQLite database, used by the test suites.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            kind: DbKind::SqliteMemory,
            max_connections: 1,
            connect_attempts: 1,
            retry_interval_ms: 500,
        }
    }

    /// Build settings from `DATABASE_URL` (required) and `DB_MAX_CONNECTIONS` (optional).
    pub fn from_env() -> Result<Self, DbInfraError> {
        let mut settings = Self::new(must_var("DATABASE_URL")?)?;
        if let Ok(raw) = env::var("DB_MAX_CONNECTIONS") {
            let max = raw.parse::<u32>().map_err(|_| {
                DbInfraError::config(format!("DB_MAX_CONNECTIONS must be a positive integer, got '{raw}'"))
            })?;
            if settings.kind != DbKind::SqliteMemory && max > 0 {
                settings.max_connections = max;
            }
        }
        Ok(settings)
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, DbInfraError> {
    env::var(name)
        .map_err(|_| DbInfraError::config(format!("Required environment variable '{name}' is not set")))
}
