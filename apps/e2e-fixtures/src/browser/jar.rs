use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::Url;
use tracing::debug;

use super::{BrowserContext, BrowserCookie, BrowserError};

/// Browser context backed by a `reqwest` cookie jar. Share the jar with a
/// client via `ClientBuilder::cookie_provider` to drive the app over HTTP.
#[derive(Debug, Clone, Default)]
pub struct JarContext {
    jar: Arc<Jar>,
}

impl JarContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jar(&self) -> Arc<Jar> {
        Arc::clone(&self.jar)
    }
}

#[async_trait]
impl BrowserContext for JarContext {
    async fn add_cookies(&self, cookies: Vec<BrowserCookie>) -> Result<(), BrowserError> {
        for cookie in cookies {
            let url = Url::parse(&cookie.url).map_err(|e| BrowserError::InvalidUrl {
                url: cookie.url.clone(),
                detail: e.to_string(),
            })?;
            self.jar.add_cookie_str(&cookie.to_set_cookie(), &url);
            debug!(name = %cookie.name, url = %url, "cookie injected into jar");
        }
        Ok(())
    }
}
