//! Shared helpers for the workspace's test binaries: logging bootstrap,
//! `.env.test` loading and hand-made user identities.

pub mod logging;

use ulid::Ulid;

/// Domain for hand-made addresses. Never used by the fixture generator, so
/// rows built with it cannot collide with generated users.
pub const OUTSIDER_EMAIL_DOMAIN: &str = "outsider.test";

/// Load `.env.test` from the working directory if present.
pub fn load_test_env() {
    if let Ok(path) = dotenvy::from_filename(".env.test") {
        tracing::debug!(path = %path.display(), "loaded test env file");
    }
}

/// Username for a row created outside the fixture generator:
/// `{prefix}_{ulid}`, lowercased to the app's `[a-z0-9_]` charset.
///
/// ```
/// use test_support::unique_username;
///
/// let a = unique_username("outsider");
/// assert_ne!(a, unique_username("outsider"));
/// assert!(a.starts_with("outsider_"));
/// ```
pub fn unique_username(prefix: &str) -> String {
    format!("{prefix}_{}", Ulid::new().to_string().to_lowercase())
}

/// Address matching [`unique_username`] on [`OUTSIDER_EMAIL_DOMAIN`].
pub fn unique_email(prefix: &str) -> String {
    format!("{}@{OUTSIDER_EMAIL_DOMAIN}", unique_username(prefix))
}
