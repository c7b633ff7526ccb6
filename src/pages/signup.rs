//! Sign Up Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use todo_sync::Notice;

use crate::session::use_session;
use crate::store::{store_notify, use_app_store};
use crate::validation::check_new_password;

const SIGNUP_FAILED: &str = "Sign up failed! Please try again.";

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (is_submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let password = password.get_untracked();
        if let Err(problem) = check_new_password(&password, &confirmation.get_untracked()) {
            store_notify(&store, Notice::error(problem));
            return;
        }
        let full_name = full_name.get_untracked();
        let email = email.get_untracked();
        set_submitting.set(true);
        spawn_local(async move {
            match session.signup(full_name.trim(), email.trim(), &password).await {
                Ok(()) => store_notify(&store, Notice::success("Account created successfully")),
                Err(err) => {
                    log::warn!("[SIGNUP] failed: {}", err);
                    store_notify(&store, Notice::error(err.user_message(SIGNUP_FAILED)));
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h1>"Sign Up"</h1>
                <input
                    type="text"
                    placeholder="Enter your full name"
                    required
                    prop:value=move || full_name.get()
                    on:input=move |ev| set_full_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Enter your email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Enter your password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm password"
                    required
                    prop:value=move || confirmation.get()
                    on:input=move |ev| set_confirmation.set(event_target_value(&ev))
                />
                <button type="submit" class="submit-btn" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Creating account..." } else { "Create Account" }}
                </button>
                <p class="form-footer">
                    "Already have an account? "
                    <A href="/login">"Sign In!"</A>
                </p>
            </form>
        </div>
    }
}
