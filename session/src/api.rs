//! Provider seam between the session flows and the HTTP transport.
//!
//! The browser build implements [`SessionApi`] with `gloo-net`; tests use a
//! scripted mock. Implementations only move bytes. Status interpretation
//! lives in `probe`, `login`, and `logout`.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Transport failure: no HTTP response was received.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// HTTP status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// `true` for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Backend session endpoints. Every call must include browser-managed
/// credentials (cookies) so the session indicator travels with it.
pub trait SessionApi {
    /// `GET /me`, adding `Authorization: Bearer <token>` when `bearer` is set.
    async fn me(&self, bearer: Option<&str>) -> Result<Reply, TransportError>;

    /// `POST /login` with an `application/x-www-form-urlencoded` body.
    async fn login(&self, form_body: &str) -> Result<Reply, TransportError>;

    /// `POST /logout` with an empty body.
    async fn logout(&self) -> Result<Reply, TransportError>;
}

/// Value for an `Authorization` header carrying `token`.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}
