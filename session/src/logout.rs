//! Session termination.
//!
//! A failed logout is logged and otherwise silent: no [`AuthEvent`] is
//! produced, so the gate keeps showing the authenticated view and the client
//! never claims a logout the server did not perform. Users currently get no
//! visible feedback for this case.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use crate::api::{SessionApi, TransportError};
use crate::state::AuthEvent;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LogoutError {
    #[error("logout failed with status {status}")]
    Rejected { status: u16 },
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// POST to `/logout` so the server invalidates the session cookie.
///
/// # Errors
///
/// Returns [`LogoutError::Rejected`] for non-2xx replies and
/// [`LogoutError::Transport`] when no reply arrives.
pub async fn logout<A: SessionApi>(api: &A) -> Result<(), LogoutError> {
    let reply = api.logout().await?;
    if !reply.is_success() {
        return Err(LogoutError::Rejected { status: reply.status });
    }
    Ok(())
}

/// Log out and return the transition to apply, if any.
pub async fn terminate<A: SessionApi>(api: &A) -> Option<AuthEvent> {
    match logout(api).await {
        Ok(()) => {
            log::debug!("logout accepted");
            Some(AuthEvent::LoggedOut)
        }
        Err(e) => {
            log::error!("error during logout: {e}");
            None
        }
    }
}
