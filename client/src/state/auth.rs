//! Auth-session signal owned by the gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthGate` creates one `RwSignal<SessionState>`. The probe, the login page,
//! and the logout button report outcomes that reach it only through
//! [`dispatch`], so every transition goes through `SessionState::apply`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::{AuthEvent, ProbeOutcome, SessionState};

pub type SessionSignal = RwSignal<SessionState>;

/// Apply `event` to the gate's session state.
///
/// Requests can resolve after the gate is disposed; the write is then dropped.
pub fn dispatch(session: SessionSignal, event: AuthEvent) {
    let label = event_label(&event);
    match session.try_update(|state| state.apply(event)) {
        Some(next) => log::debug!("auth event {label} -> {next:?}"),
        None => leptos::logging::warn!("auth event {label} dropped: gate disposed"),
    }
}

/// Short name used in transition logs. Never includes identity data.
pub(crate) fn event_label(event: &AuthEvent) -> &'static str {
    match event {
        AuthEvent::ProbeResolved(ProbeOutcome::Authenticated(_)) => "probe:authenticated",
        AuthEvent::ProbeResolved(ProbeOutcome::Unauthenticated) => "probe:unauthenticated",
        AuthEvent::LoggedIn { .. } => "login",
        AuthEvent::LoggedOut => "logout",
    }
}
