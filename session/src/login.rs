//! Credential submission and the login form state machine.
//!
//! ```text
//! Idle --begin--> Submitting --finish(Ok)--> Succeeded
//!                      \------finish(Err)--> Idle (error retained)
//! ```
//!
//! The error message survives a failed attempt so the form can show it, and
//! is cleared by the next [`LoginForm::begin`].

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::Deserialize;

use crate::api::{SessionApi, TransportError};
use crate::state::AuthEvent;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const TRANSPORT_FAILED_MESSAGE: &str = "An error occurred. Please try again.";
pub const MISSING_FIELDS_MESSAGE: &str = "Enter both email and password.";

/// Email/password pair entered in the login form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// URL-encoded form body. The backend expects the email under `username`.
    #[must_use]
    pub fn form_body(&self) -> String {
        [("username", self.email.as_str()), ("password", self.password.as_str())]
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Why a login attempt failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The server answered with a non-2xx status.
    #[error("login rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    /// No response reached the client.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl LoginError {
    /// Text shown to the user under the form heading.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { detail: Some(detail), .. } => detail.clone(),
            Self::Rejected { detail: None, .. } => LOGIN_FAILED_MESSAGE.to_owned(),
            Self::Transport(_) => TRANSPORT_FAILED_MESSAGE.to_owned(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Pull a displayable `detail` string from a JSON error body.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}

/// POST the credentials to `/login`.
///
/// # Errors
///
/// Returns [`LoginError::Rejected`] for non-2xx replies and
/// [`LoginError::Transport`] when no reply arrives.
pub async fn submit<A: SessionApi>(api: &A, credentials: &Credentials) -> Result<(), LoginError> {
    let reply = api.login(&credentials.form_body()).await?;
    if reply.is_success() {
        log::debug!("login accepted for {}", credentials.email);
        return Ok(());
    }
    let detail = error_detail(&reply.body);
    log::info!("login rejected: status={} detail={detail:?}", reply.status);
    Err(LoginError::Rejected { status: reply.status, detail })
}

/// Submit `credentials`, record the result on `form`, and return the
/// transition to apply. Only a 2xx reply yields `LoggedIn`.
pub async fn attempt<A: SessionApi>(api: &A, form: &mut LoginForm, credentials: &Credentials) -> Option<AuthEvent> {
    let result = submit(api, credentials).await;
    form.finish(&result)
        .then(|| AuthEvent::LoggedIn { username: credentials.email.clone() })
}

/// Lifecycle position of the login form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Local state of the login form between attempts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub phase: LoginPhase,
    pub error: Option<String>,
}

impl LoginForm {
    /// Start an attempt. Clears any previous error and enters `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns the message to show when a field is empty. Returns `Ok(None)`
    /// without changing state when an attempt is already in flight.
    pub fn begin(&mut self, email: &str, password: &str) -> Result<Option<Credentials>, &'static str> {
        if self.phase == LoginPhase::Submitting {
            return Ok(None);
        }
        if email.is_empty() || password.is_empty() {
            return Err(MISSING_FIELDS_MESSAGE);
        }
        self.error = None;
        self.phase = LoginPhase::Submitting;
        Ok(Some(Credentials { email: email.to_owned(), password: password.to_owned() }))
    }

    /// Record the attempt result. Returns `true` when the login succeeded.
    pub fn finish(&mut self, result: &Result<(), LoginError>) -> bool {
        match result {
            Ok(()) => {
                self.phase = LoginPhase::Succeeded;
                self.error = None;
                true
            }
            Err(e) => {
                self.phase = LoginPhase::Idle;
                self.error = Some(e.user_message());
                false
            }
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }
}
