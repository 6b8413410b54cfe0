//! Signed cookie session codec shared by the application and its e2e fixtures.
//!
//! The application decodes `_session` cookies with [`SessionCookieCodec::read_session`]
//! (or the actix-web extractors in [`extract`]); the fixtures mint them with
//! [`SessionCookieCodec::commit_session`]. Both sides go through this crate so the
//! cookie format and the session key can never drift apart.

pub mod codec;
pub mod error;
pub mod extract;
pub mod session;

pub use actix_web::cookie;

pub use codec::{cookie_value, SessionCookieCodec, MIN_SECRET_LEN};
pub use error::SessionCookieError;
pub use extract::AuthenticatedSession;
pub use session::CookieSession;

/// Name of the cookie carrying the signed session container.
pub const SESSION_COOKIE_NAME: &str = "_session";

/// Key under which the authenticator stores the session id inside the container.
pub const SESSION_ID_KEY: &str = "sessionId";
