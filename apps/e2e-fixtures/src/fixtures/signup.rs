//! Signup gate: a single global password required by the signup form.

use tracing::info;

use crate::adapters::signup_passwords_sea;
use crate::db::with_txn;
use crate::error::FixtureError;
use crate::harness::FixtureHarness;

/// Phrase the gate is set to.
pub const SIGNUP_PASSWORD_PHRASE: &str = "horses are cool";

impl FixtureHarness {
    /// Replace any existing gate record with one hashing [`SIGNUP_PASSWORD_PHRASE`].
    /// Idempotent: exactly one record afterwards.
    pub async fn set_signup_password(&self) -> Result<(), FixtureError> {
        let hash = self.hasher.hash(SIGNUP_PASSWORD_PHRASE)?;
        let removed = with_txn(&self.db, move |txn| {
            Box::pin(async move {
                let removed = signup_passwords_sea::delete_all(txn).await?;
                signup_passwords_sea::create(txn, hash).await?;
                Ok::<_, FixtureError>(removed)
            })
        })
        .await?;

        info!(replaced = removed, "fixture=signup_password_set");
        Ok(())
    }

    /// True when `phrase` matches a stored gate record.
    pub async fn verify_signup_password(&self, phrase: &str) -> Result<bool, FixtureError> {
        for record in signup_passwords_sea::find_all(&self.db).await? {
            if self.hasher.verify(phrase, &record.hash)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
