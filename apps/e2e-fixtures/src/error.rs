use thiserror::Error;

use crate::browser::BrowserError;

/// Entities a fixture lookup can miss.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    User,
    Session,
}

#[derive(Debug, Error)]
pub enum FixtureError {
    /// Persistence failure, passed through untouched (uniqueness violations included).
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
    #[error("not found {kind:?}: {detail}")]
    NotFound { kind: NotFoundKind, detail: String },
    #[error("password hashing failed: {detail}")]
    Hash { detail: String },
    #[error(transparent)]
    Cookie(#[from] session_cookie::SessionCookieError),
    #[error("committed session header carried no '{name}' cookie")]
    MissingCookie { name: String },
    #[error(transparent)]
    Browser(#[from] BrowserError),
    #[error("configuration error: {detail}")]
    Config { detail: String },
    #[error(transparent)]
    DbInfra(#[from] db_infra::DbInfraError),
}

impl FixtureError {
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            detail: detail.into(),
        }
    }

    pub fn hash(detail: impl Into<String>) -> Self {
        Self::Hash {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FixtureError::NotFound { .. })
    }

    /// True for unique-constraint violations on either supported backend.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            FixtureError::Db(e) => matches!(
                e.sql_err(),
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
            ),
            _ => false,
        }
    }
}
