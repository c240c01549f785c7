//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! `auth_gate` owns the session state and picks the view; `logout_button`
//! is the only control that ends a session.

pub mod auth_gate;
pub mod logout_button;
