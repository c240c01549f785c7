//! One-shot session probe run when the gate mounts.
//!
//! ERROR HANDLING
//! ==============
//! Fail closed: any non-2xx status or transport error classifies the session
//! as unauthenticated. Nothing here can produce `Authenticated` without a 2xx.

#[cfg(test)]
#[path = "probe_test.rs"]
mod probe_test;

use crate::api::SessionApi;
use crate::cookie::session_token;
use crate::state::{Identity, ProbeOutcome};

/// Classify the current session by calling `/me`.
///
/// `cookie_header` is the browser's `document.cookie`. When it carries a
/// session token, the decoded value is also sent as a bearer header in case
/// the transport does not honor cookie auth.
pub async fn probe<A: SessionApi>(api: &A, cookie_header: &str) -> ProbeOutcome {
    let token = session_token(cookie_header);
    match api.me(token.as_deref()).await {
        Ok(reply) if reply.is_success() => {
            let identity = parse_identity(&reply.body);
            log::debug!("session probe: authenticated (identity={})", identity.is_some());
            ProbeOutcome::Authenticated(identity)
        }
        Ok(reply) => {
            log::debug!("session probe: rejected with status {}", reply.status);
            ProbeOutcome::Unauthenticated
        }
        Err(e) => {
            log::warn!("session probe failed: {e}");
            ProbeOutcome::Unauthenticated
        }
    }
}

/// Best-effort parse of a `/me` body such as `{"username": "..."}`.
pub(crate) fn parse_identity(body: &str) -> Option<Identity> {
    serde_json::from_str::<Identity>(body)
        .ok()
        .filter(|identity| !identity.username.is_empty())
}
