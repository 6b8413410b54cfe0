//! Authenticated browser state without driving the login form.

use tracing::info;

use crate::browser::{BrowserContext, BrowserCookie, CookieSameSite};
use crate::error::FixtureError;
use crate::fixtures::sessions::{mint_session, session_cookie_value};
use crate::fixtures::users::{InsertUserOptions, SyntheticUser};
use crate::harness::FixtureHarness;

#[derive(Debug, Clone, Default)]
pub struct LoginOptions {
    /// Cookie URL. Defaults to the configured base URL.
    pub base_url: Option<String>,
    /// Existing user id to log in as. A fresh user is created when absent.
    pub user_id: Option<i64>,
}

impl LoginOptions {
    pub fn as_user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

impl FixtureHarness {
    /// Log `context` in: resolve or create the user, mint a session row,
    /// sign it into a `_session` cookie and inject that cookie.
    ///
    /// An unknown `user_id` fails with `NotFound` before any session is written.
    pub async fn login_page(
        &self,
        context: &dyn BrowserContext,
        options: LoginOptions,
    ) -> Result<SyntheticUser, FixtureError> {
        let user = match options.user_id {
            Some(user_id) => self.find_user(user_id).await?,
            None => self.insert_new_user(InsertUserOptions::default()).await?,
        };

        let session_id = mint_session(&self.db, user.id).await?;
        let value = session_cookie_value(&self.codec, &session_id)?;

        let url = options.base_url.unwrap_or_else(|| self.config.base_url());
        context
            .add_cookies(vec![BrowserCookie {
                name: self.codec.name().to_string(),
                value,
                url: url.clone(),
                same_site: CookieSameSite::Lax,
                http_only: true,
                secure: self.config.is_production,
            }])
            .await?;

        info!(user_id = user.id, session_id = %session_id, url = %url, "fixture=logged_in");
        Ok(user)
    }
}
