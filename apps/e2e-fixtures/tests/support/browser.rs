//! Browser context double that records injected cookies.

use async_trait::async_trait;
use e2e_fixtures::{BrowserContext, BrowserCookie, BrowserError};
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct RecordingContext {
    cookies: Mutex<Vec<BrowserCookie>>,
    reject: bool,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context whose driver refuses every cookie.
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    pub fn cookies(&self) -> Vec<BrowserCookie> {
        self.cookies.lock().clone()
    }

    pub fn single_cookie(&self) -> BrowserCookie {
        let cookies = self.cookies();
        assert_eq!(cookies.len(), 1, "expected exactly one injected cookie");
        cookies.into_iter().next().expect("one cookie")
    }
}

#[async_trait]
impl BrowserContext for RecordingContext {
    async fn add_cookies(&self, cookies: Vec<BrowserCookie>) -> Result<(), BrowserError> {
        if self.reject {
            return Err(BrowserError::Driver("context closed".into()));
        }
        self.cookies.lock().extend(cookies);
        Ok(())
    }
}
