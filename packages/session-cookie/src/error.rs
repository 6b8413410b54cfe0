use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionCookieError {
    #[error("session secret must be at least 32 bytes, got {0}")]
    SecretTooShort(usize),
    #[error("cookie '{0}' not present")]
    MissingCookie(String),
    #[error("cookie signature verification failed")]
    BadSignature,
    #[error("malformed session payload: {0}")]
    MalformedPayload(String),
    #[error("failed to encode session payload: {0}")]
    Encode(String),
    #[error("session codec is not registered as app data")]
    NotConfigured,
    #[error("no authenticated session")]
    Unauthenticated,
}

impl SessionCookieError {
    fn code(&self) -> &'static str {
        match self {
            SessionCookieError::SecretTooShort(_) => "SESSION_SECRET_TOO_SHORT",
            SessionCookieError::MissingCookie(_) => "SESSION_COOKIE_MISSING",
            SessionCookieError::BadSignature => "SESSION_BAD_SIGNATURE",
            SessionCookieError::MalformedPayload(_) => "SESSION_MALFORMED",
            SessionCookieError::Encode(_) => "SESSION_ENCODE_FAILED",
            SessionCookieError::NotConfigured => "SESSION_NOT_CONFIGURED",
            SessionCookieError::Unauthenticated => "UNAUTHORIZED",
        }
    }
}

#[derive(Serialize)]
struct ProblemDetails {
    #[serde(rename = "type")]
    type_: String,
    title: &'static str,
    status: u16,
    detail: String,
    code: &'static str,
}

impl ResponseError for SessionCookieError {
    fn status_code(&self) -> StatusCode {
        match self {
            SessionCookieError::MissingCookie(_)
            | SessionCookieError::BadSignature
            | SessionCookieError::MalformedPayload(_)
            | SessionCookieError::Unauthenticated => StatusCode::UNAUTHORIZED,
            SessionCookieError::SecretTooShort(_)
            | SessionCookieError::Encode(_)
            | SessionCookieError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let code = self.code();
        // internal failures keep their detail out of the response body
        let (title, detail) = if status == StatusCode::UNAUTHORIZED {
            ("Unauthorized", self.to_string())
        } else {
            ("Internal Server Error", "Session handling failed".to_string())
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .json(ProblemDetails {
                type_: format!("about:blank#{}", code.to_lowercase()),
                title,
                status: status.as_u16(),
                detail,
                code,
            })
    }
}
