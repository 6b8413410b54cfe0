//! actix-web extractors for the application side of the session cookie.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use tracing::debug;

use crate::codec::SessionCookieCodec;
use crate::error::SessionCookieError;
use crate::session::CookieSession;

fn codec_from_req(req: &HttpRequest) -> Result<&SessionCookieCodec, SessionCookieError> {
    req.app_data::<web::Data<SessionCookieCodec>>()
        .map(|data| data.get_ref())
        .ok_or(SessionCookieError::NotConfigured)
}

/// Lenient: a missing or unreadable cookie yields an empty session.
impl FromRequest for CookieSession {
    type Error = SessionCookieError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(codec_from_req(req).map(|codec| match req.cookie(codec.name()) {
            Some(cookie) => codec.read_session(cookie.value()).unwrap_or_else(|e| {
                debug!(error = %e, "unreadable session cookie, starting empty");
                codec.new_session()
            }),
            None => codec.new_session(),
        }))
    }
}

/// A request carrying a verified session cookie with a session id.
/// Rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub session_id: String,
    pub session: CookieSession,
}

impl FromRequest for AuthenticatedSession {
    type Error = SessionCookieError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedSession, SessionCookieError> {
    let codec = codec_from_req(req)?;
    let cookie = req
        .cookie(codec.name())
        .ok_or_else(|| SessionCookieError::MissingCookie(codec.name().to_string()))?;
    let session = codec.read_session(cookie.value())?;
    let session_id = session
        .session_id()
        .map(str::to_string)
        .ok_or(SessionCookieError::Unauthenticated)?;

    Ok(AuthenticatedSession {
        session_id,
        session,
    })
}
