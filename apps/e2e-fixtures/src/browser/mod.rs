//! Browser-driver seam: the only thing the fixtures need from a driver is
//! injecting cookies into a browser context.

use async_trait::async_trait;
use session_cookie::cookie::{Cookie, SameSite};
use thiserror::Error;

pub mod jar;

pub use jar::JarContext;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("invalid cookie url '{url}': {detail}")]
    InvalidUrl { url: String, detail: String },
    #[error("browser driver rejected cookies: {0}")]
    Driver(String),
}

/// Same-site policy of an injected cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieSameSite {
    Strict,
    Lax,
    None,
}

impl From<CookieSameSite> for SameSite {
    fn from(value: CookieSameSite) -> Self {
        match value {
            CookieSameSite::Strict => SameSite::Strict,
            CookieSameSite::Lax => SameSite::Lax,
            CookieSameSite::None => SameSite::None,
        }
    }
}

/// A cookie as handed to `context.add_cookies`, scoped by URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserCookie {
    pub name: String,
    pub value: String,
    pub url: String,
    pub same_site: CookieSameSite,
    pub http_only: bool,
    pub secure: bool,
}

impl BrowserCookie {
    /// `Set-Cookie` rendering, for drivers that ingest header strings.
    pub fn to_set_cookie(&self) -> String {
        Cookie::build(self.name.clone(), self.value.clone())
            .path("/")
            .same_site(self.same_site.into())
            .http_only(self.http_only)
            .secure(self.secure)
            .finish()
            .to_string()
    }
}

#[async_trait]
pub trait BrowserContext: Send + Sync {
    async fn add_cookies(&self, cookies: Vec<BrowserCookie>) -> Result<(), BrowserError>;
}
