//! Fixture configuration, read once from the environment at harness startup.

use std::env;

use db_infra::db::DbSettings;
use session_cookie::{SessionCookieCodec, MIN_SECRET_LEN};

use crate::error::FixtureError;

const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Port of the application under test.
    pub port: u16,
    /// Production-flagged environment: minted cookies carry `Secure`.
    pub is_production: bool,
    /// Explicit base URL; falls back to `http://localhost:<port>/`.
    pub base_url: Option<String>,
    pub session_secret: Vec<u8>,
    pub database: DbSettings,
}

impl std::fmt::Debug for FixtureConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixtureConfig")
            .field("port", &self.port)
            .field("is_production", &self.is_production)
            .field("base_url", &self.base_url)
            .field("session_secret", &"<redacted>")
            .field("database", &db_infra::sanitize_db_url(&self.database.url))
            .finish()
    }
}

impl FixtureConfig {
    pub fn new(session_secret: impl Into<Vec<u8>>, database: DbSettings) -> Self {
        Self {
            port: DEFAULT_PORT,
            is_production: false,
            base_url: None,
            session_secret: session_secret.into(),
            database,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_production(mut self, is_production: bool) -> Self {
        self.is_production = is_production;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Read `PORT`, `APP_ENV`, `BASE_URL`, `SESSION_SECRET` and `DATABASE_URL`.
    pub fn from_env() -> Result<Self, FixtureError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| FixtureError::config(format!("PORT must be a port number, got '{raw}'")))?,
            Err(_) => DEFAULT_PORT,
        };
        let is_production = env::var("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);
        let base_url = env::var("BASE_URL").ok().filter(|v| !v.is_empty());

        let session_secret = must_var("SESSION_SECRET")?.into_bytes();
        if session_secret.len() < MIN_SECRET_LEN {
            return Err(FixtureError::config(format!(
                "SESSION_SECRET must be at least {MIN_SECRET_LEN} bytes"
            )));
        }

        Ok(Self {
            port,
            is_production,
            base_url,
            session_secret,
            database: DbSettings::from_env()?,
        })
    }

    /// Base URL cookies are scoped to.
    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}/", self.port))
    }

    /// Codec matching the application's cookie settings for this environment.
    pub fn session_codec(&self) -> Result<SessionCookieCodec, FixtureError> {
        Ok(SessionCookieCodec::new(&self.session_secret)?.with_secure(self.is_production))
    }
}

fn must_var(name: &str) -> Result<String, FixtureError> {
    env::var(name)
        .map_err(|_| FixtureError::config(format!("Required environment variable '{name}' is not set")))
}
