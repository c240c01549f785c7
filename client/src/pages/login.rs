//! Email + password login form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form state lives in `session::LoginForm`; this page binds it to inputs and
//! reports success to the gate by passing the `LoggedIn` event to `on_login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use session::{AuthEvent, LoginForm, LoginPhase};

/// Submit button text for the current phase.
pub(crate) fn submit_label(phase: LoginPhase) -> &'static str {
    match phase {
        LoginPhase::Submitting => "Logging in...",
        LoginPhase::Idle | LoginPhase::Succeeded => "Login",
    }
}

#[component]
pub fn LoginPage(on_login: Callback<AuthEvent>) -> impl IntoView {
    #[cfg(feature = "csr")]
    let api = expect_context::<crate::net::api::BrowserApi>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let started = form.try_update(|f| match f.begin(&email_value, &password_value) {
            Ok(started) => started,
            Err(message) => {
                f.error = Some(message.to_owned());
                None
            }
        });
        let Some(credentials) = started.flatten() else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                // `begin` refuses new attempts while this one is in flight,
                // so the snapshot cannot go stale before it is written back.
                let mut snapshot = form.get_untracked();
                let event = session::attempt(&api, &mut snapshot, &credentials).await;
                form.try_set(snapshot);
                if let Some(event) = event {
                    on_login.run(event);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, on_login);
        }
    };

    let error = move || form.with(|f| f.error.clone());
    let submitting = move || form.with(LoginForm::is_submitting);

    view! {
        <Title text="Login"/>
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h2 class="login-title">"Login"</h2>

                <Show when=move || error().is_some()>
                    <p class="login-error">{move || error().unwrap_or_default()}</p>
                </Show>

                <div class="login-group">
                    <label for="email" class="login-label">"Email:"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>

                <div class="login-group">
                    <label for="password" class="login-label">"Password:"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>

                <button class="login-button" type="submit" disabled=submitting>
                    {move || submit_label(form.with(|f| f.phase))}
                </button>
            </form>
        </div>
    }
}
