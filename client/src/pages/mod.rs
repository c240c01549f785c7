//! Page modules for the gate's two exclusive views.
//!
//! ARCHITECTURE
//! ============
//! `login` is shown to unauthenticated sessions; `home` stands in for the
//! protected application.

pub mod home;
pub mod login;
