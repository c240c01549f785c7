//! Session gate: probes once on mount, then renders exactly one view.
//!
//! SYSTEM CONTEXT
//! ==============
//! While the probe is in flight nothing is rendered, so neither the login
//! form nor the protected view flashes before the server answers.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use session::{AuthEvent, GateView, SessionState};

use crate::components::logout_button::LogoutButton;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::state::auth::{SessionSignal, dispatch};

#[component]
pub fn AuthGate() -> impl IntoView {
    let state: SessionSignal = RwSignal::new(SessionState::default());
    install_probe(state);

    // Both children report typed transitions; the reducer rejects any that
    // do not fit the current state.
    let report = Callback::new(move |event: AuthEvent| dispatch(state, event));
    let on_login = report;
    let on_logout = report;
    let identity = Signal::derive(move || state.with(|s| s.identity.clone()));
    let gate_view = Memo::new(move |_| state.with(SessionState::view));

    move || match gate_view.get() {
        GateView::Blank => ().into_any(),
        GateView::Login => view! { <LoginPage on_login/> }.into_any(),
        GateView::Protected => view! {
            <HomePage identity/>
            <LogoutButton on_logout/>
        }
        .into_any(),
    }
}

/// Run the session probe once for this mount.
fn install_probe(state: SessionSignal) {
    #[cfg(feature = "csr")]
    {
        use crate::net::api::BrowserApi;
        use crate::util::cookie::document_cookie;

        let api = expect_context::<BrowserApi>();
        Effect::new(move |_| {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let outcome = session::probe(&api, &document_cookie()).await;
                dispatch(state, AuthEvent::ProbeResolved(outcome));
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = state;
    }
}
