//! Browser implementation of the session endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, always with
//! `credentials: include` so the session cookie is sent and retained.
//! Host builds (tests, tooling): every call reports a transport error, which
//! the session flows treat as a failed request.
//!
//! ERROR HANDLING
//! ==============
//! Only "no response" is an error here. Status codes are returned as-is in a
//! [`Reply`] and interpreted by the `session` crate.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use session::{ApiConfig, Reply, SessionApi, TransportError};

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "not available outside the browser";

/// `SessionApi` backed by the browser's `fetch`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserApi {
    pub config: ApiConfig,
}

impl BrowserApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Base URL from `AUTH_GATE_API_URL` at compile time; same origin if unset.
    pub fn from_build_env() -> Self {
        Self::new(ApiConfig::from_optional(option_env!("AUTH_GATE_API_URL")))
    }
}

#[cfg(feature = "csr")]
fn transport_error(e: gloo_net::Error) -> TransportError {
    TransportError::new(e.to_string())
}

#[cfg(feature = "csr")]
async fn send(request: Result<gloo_net::http::Request, gloo_net::Error>) -> Result<Reply, TransportError> {
    let resp = request.map_err(transport_error)?.send().await.map_err(transport_error)?;
    let status = resp.status();
    let body = body_or_empty(status, resp.text().await);
    Ok(Reply { status, body })
}

/// Reply body text, or empty (with a warning) when it could not be read.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn body_or_empty<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| {
        log::warn!("could not read response body (status {status}): {e}");
        String::new()
    })
}

impl SessionApi for BrowserApi {
    async fn me(&self, bearer: Option<&str>) -> Result<Reply, TransportError> {
        #[cfg(feature = "csr")]
        {
            let mut request = gloo_net::http::Request::get(&self.config.me_url())
                .credentials(web_sys::RequestCredentials::Include);
            if let Some(token) = bearer {
                request = request.header("Authorization", &session::api::bearer_header(token));
            }
            send(request.build()).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = bearer;
            Err(TransportError::new(UNAVAILABLE))
        }
    }

    async fn login(&self, form_body: &str) -> Result<Reply, TransportError> {
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::post(&self.config.login_url())
                .credentials(web_sys::RequestCredentials::Include)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(form_body.to_owned());
            send(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = form_body;
            Err(TransportError::new(UNAVAILABLE))
        }
    }

    async fn logout(&self) -> Result<Reply, TransportError> {
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::post(&self.config.logout_url())
                .credentials(web_sys::RequestCredentials::Include)
                .build();
            send(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(TransportError::new(UNAVAILABLE))
        }
    }
}
