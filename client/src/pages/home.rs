//! Protected landing view.

use leptos::prelude::*;
use session::Identity;

/// Placeholder for the authenticated application.
#[component]
pub fn HomePage(identity: Signal<Option<Identity>>) -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Welcome"</h1>
            <Show when=move || identity.with(Option::is_some)>
                <p class="home-identity">
                    "Signed in as "
                    <span>{move || identity.get().map(|i| i.username).unwrap_or_default()}</span>
                </p>
            </Show>
        </div>
    }
}
