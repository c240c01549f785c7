//! Browser helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps `web-sys` glue out of pages and components so they stay testable on
//! the host.

pub mod cookie;
