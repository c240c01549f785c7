//! # client
//!
//! Leptos + WASM front-end for the auth gate. Probes the session on mount,
//! then renders either the login form or the protected view with a logout
//! control. Session semantics live in the `session` crate; this crate owns
//! rendering and the browser transport.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and mounts [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
