//! Authentication state and the single reducer that moves it.
//!
//! DESIGN
//! ======
//! `AuthState` never changes except through [`SessionState::apply`]. Views are
//! derived with [`SessionState::view`], so the login form and the protected
//! view can never be selected together.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::Deserialize;

/// Tri-valued authentication status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Probe not yet resolved.
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Identity reported by a successful `/me` probe or taken from a login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Identity {
    pub username: String,
}

/// Result of a session probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server accepted the session. Identity is best-effort.
    Authenticated(Option<Identity>),
    Unauthenticated,
}

/// Transition messages accepted by [`SessionState::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    ProbeResolved(ProbeOutcome),
    LoggedIn { username: String },
    LoggedOut,
}

/// Which of the gate's exclusive views to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    /// Nothing rendered while the probe is in flight.
    Blank,
    Login,
    Protected,
}

/// Auth state plus the identity shown in the protected view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub auth: AuthState,
    pub identity: Option<Identity>,
}

impl SessionState {
    /// Apply a transition event and return the resulting auth state.
    ///
    /// Only `ProbeResolved` leaves `Unknown`, and a second one is ignored;
    /// only a fresh mount (a new `SessionState`) probes again. `LoggedIn` is
    /// accepted only from `Unauthenticated` and `LoggedOut` only from
    /// `Authenticated`; anything else is logged and dropped.
    pub fn apply(&mut self, event: AuthEvent) -> AuthState {
        match event {
            AuthEvent::ProbeResolved(outcome) => {
                if self.auth != AuthState::Unknown {
                    log::debug!("ignoring late probe result in state {:?}", self.auth);
                    return self.auth;
                }
                match outcome {
                    ProbeOutcome::Authenticated(identity) => {
                        self.auth = AuthState::Authenticated;
                        self.identity = identity;
                    }
                    ProbeOutcome::Unauthenticated => {
                        self.auth = AuthState::Unauthenticated;
                        self.identity = None;
                    }
                }
            }
            AuthEvent::LoggedIn { username } => {
                if self.auth != AuthState::Unauthenticated {
                    log::debug!("ignoring login in state {:?}", self.auth);
                    return self.auth;
                }
                self.auth = AuthState::Authenticated;
                self.identity = Some(Identity { username });
            }
            AuthEvent::LoggedOut => {
                if self.auth != AuthState::Authenticated {
                    log::debug!("ignoring logout in state {:?}", self.auth);
                    return self.auth;
                }
                self.auth = AuthState::Unauthenticated;
                self.identity = None;
            }
        }
        self.auth
    }

    #[must_use]
    pub fn view(&self) -> GateView {
        match self.auth {
            AuthState::Unknown => GateView::Blank,
            AuthState::Authenticated => GateView::Protected,
            AuthState::Unauthenticated => GateView::Login,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.auth != AuthState::Unknown
    }
}
