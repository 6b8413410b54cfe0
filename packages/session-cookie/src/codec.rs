//! Signing and (de)serialization of the session cookie.
//!
//! Wire format of the cookie value: `<signature><payload>`, where `payload` is
//! the URL-safe, unpadded base64 of the container's JSON object and `signature`
//! is the base64 HMAC-SHA256 tag the `cookie` crate's signed jar prepends.

use std::fmt;

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, CookieJar, Key, SameSite};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use tracing::debug;

use crate::error::SessionCookieError;
use crate::session::CookieSession;
use crate::SESSION_COOKIE_NAME;

/// Shortest accepted signing secret; the signing key is derived from it.
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Clone)]
pub struct SessionCookieCodec {
    key: Key,
    name: String,
    path: String,
    secure: bool,
    max_age: Option<Duration>,
}

impl fmt::Debug for SessionCookieCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCookieCodec")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("secure", &self.secure)
            .field("max_age", &self.max_age)
            .finish_non_exhaustive()
    }
}

impl SessionCookieCodec {
    /// Create a codec signing with a key derived from `secret`.
    pub fn new(secret: &[u8]) -> Result<Self, SessionCookieError> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(SessionCookieError::SecretTooShort(secret.len()));
        }
        Ok(Self {
            key: Key::derive_from(secret),
            name: SESSION_COOKIE_NAME.to_string(),
            path: "/".to_string(),
            secure: false,
            max_age: None,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mark emitted cookies `Secure` (production deployments).
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// A fresh, empty container.
    pub fn new_session(&self) -> CookieSession {
        CookieSession::new()
    }

    /// Serialize and sign `session` into a `Set-Cookie` header value.
    pub fn commit_session(&self, session: &CookieSession) -> Result<String, SessionCookieError> {
        let json =
            serde_json::to_vec(session).map_err(|e| SessionCookieError::Encode(e.to_string()))?;
        let payload = URL_SAFE_NO_PAD.encode(json);

        let mut jar = CookieJar::new();
        jar.signed_mut(&self.key)
            .add(Cookie::new(self.name.clone(), payload));
        let signed_value = jar
            .get(&self.name)
            .map(|c| c.value().to_string())
            .ok_or_else(|| SessionCookieError::Encode("signed jar dropped the cookie".into()))?;

        let mut builder = Cookie::build(self.name.clone(), signed_value)
            .path(self.path.clone())
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure);
        if let Some(max_age) = self.max_age {
            builder = builder.max_age(max_age);
        }

        Ok(builder.finish().to_string())
    }

    /// Verify and decode a raw cookie value (no name, no attributes).
    pub fn read_session(&self, value: &str) -> Result<CookieSession, SessionCookieError> {
        let mut jar = CookieJar::new();
        jar.add_original(Cookie::new(self.name.clone(), value.to_string()));
        let verified = jar
            .signed(&self.key)
            .get(&self.name)
            .ok_or(SessionCookieError::BadSignature)?;

        let json = URL_SAFE_NO_PAD
            .decode(verified.value())
            .map_err(|e| SessionCookieError::MalformedPayload(e.to_string()))?;
        serde_json::from_slice(&json).map_err(|e| SessionCookieError::MalformedPayload(e.to_string()))
    }

    /// Session from a request `Cookie` header. Missing or invalid cookies
    /// yield an empty container.
    pub fn get_session(&self, cookie_header: Option<&str>) -> CookieSession {
        let Some(value) = cookie_header.and_then(|h| cookie_value(h, &self.name)) else {
            return self.new_session();
        };
        match self.read_session(&value) {
            Ok(session) => session,
            Err(e) => {
                debug!(error = %e, cookie = %self.name, "discarding unreadable session cookie");
                self.new_session()
            }
        }
    }
}

/// Extract the value of cookie `name` from a `Cookie` or `Set-Cookie` header.
/// Attribute segments (`Path=/`, `HttpOnly`, ...) are skipped.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| Cookie::parse(segment).ok())
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}
