//! Client-side reactive state.
//!
//! DESIGN
//! ======
//! The only shared state is the gate's session signal; pages keep their form
//! state local.

pub mod auth;
