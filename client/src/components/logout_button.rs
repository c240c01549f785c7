//! Logout control shown alongside the protected view.

use leptos::prelude::*;
use session::AuthEvent;

/// Passes `LoggedOut` to `on_logout` only after the server confirms the logout.
///
/// Failures are logged by `session::terminate` and leave the page as is.
#[component]
pub fn LogoutButton(on_logout: Callback<AuthEvent>) -> impl IntoView {
    #[cfg(feature = "csr")]
    let api = expect_context::<crate::net::api::BrowserApi>();

    let on_click = move |_| {
        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                if let Some(event) = session::terminate(&api).await {
                    on_logout.run(event);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = on_logout;
        }
    };

    view! {
        <button class="logout-button" type="button" on:click=on_click>
            "Logout"
        </button>
    }
}
