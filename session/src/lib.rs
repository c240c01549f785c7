//! Client-side session state machine for the auth gate.
//!
//! This crate owns everything about authentication status that does not need
//! a browser: the tri-valued [`AuthState`], the [`AuthEvent`] messages that
//! move it, session-cookie parsing, and the probe/login/logout flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `client` crate renders views from [`SessionState`] and implements
//! [`SessionApi`] over `gloo-net`. Tests here run the same flows against a
//! scripted in-memory API.

pub mod api;
pub mod config;
pub mod cookie;
pub mod login;
pub mod logout;
pub mod probe;
pub mod state;

#[cfg(test)]
mod mock;

pub use api::{Reply, SessionApi, TransportError};
pub use config::ApiConfig;
pub use cookie::session_token;
pub use login::{Credentials, LoginError, LoginForm, LoginPhase, attempt};
pub use logout::{LogoutError, terminate};
pub use probe::probe;
pub use state::{AuthEvent, AuthState, GateView, Identity, ProbeOutcome, SessionState};
