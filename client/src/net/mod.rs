//! Networking for the session endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the `session` crate's `SessionApi` over `gloo-net`, so
//! the probe/login/logout flows run unchanged in the browser.

pub mod api;
