//! Session minting: a persisted session row plus the signed cookie value the
//! application will accept for it.

use sea_orm::ConnectionTrait;
use session_cookie::{cookie_value, SessionCookieCodec, SESSION_ID_KEY};
use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::adapters::sessions_sea;
use crate::error::FixtureError;

/// Lifetime of a minted session.
pub const SESSION_TTL: Duration = Duration::days(30);

/// Insert a session for `user_id` expiring [`SESSION_TTL`] from now. Returns its id.
pub async fn mint_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<String, FixtureError> {
    let expires = OffsetDateTime::now_utc() + SESSION_TTL;
    let session = sessions_sea::create_session(conn, user_id, expires).await?;
    debug!(user_id, session_id = %session.id, "session=minted");
    Ok(session.id)
}

/// Bare `_session` cookie value carrying `session_id`, as the app's own
/// `commit_session` would emit it (attributes stripped).
pub fn session_cookie_value(
    codec: &SessionCookieCodec,
    session_id: &str,
) -> Result<String, FixtureError> {
    let mut session = codec.new_session();
    session.set(SESSION_ID_KEY, session_id);
    let header = codec.commit_session(&session)?;
    cookie_value(&header, codec.name()).ok_or_else(|| FixtureError::MissingCookie {
        name: codec.name().to_string(),
    })
}
