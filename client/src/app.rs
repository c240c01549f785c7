//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::auth_gate::AuthGate;
use crate::net::api::BrowserApi;

/// Provides the session API context and mounts the auth gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(BrowserApi::from_build_env());

    view! {
        <Title text="Auth Gate"/>
        <AuthGate/>
    }
}
