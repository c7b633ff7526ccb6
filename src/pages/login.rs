//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use todo_sync::Notice;

use crate::session::use_session;
use crate::store::{store_notify, use_app_store};

const LOGIN_FAILED: &str = "Login failed! Please try again.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let email = email.get_untracked();
        let password = password.get_untracked();
        set_submitting.set(true);
        spawn_local(async move {
            match session.login(email.trim(), &password).await {
                Ok(()) => store_notify(&store, Notice::success("Login successful")),
                Err(err) => {
                    log::warn!("[LOGIN] failed: {}", err);
                    store_notify(&store, Notice::error(err.user_message(LOGIN_FAILED)));
                }
            }
            // The page is gone after a successful login
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h1>"Login"</h1>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <A href="/forgot-password" attr:class="form-link">"Forgot password?"</A>
                <button type="submit" class="submit-btn" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Logging in..." } else { "Login" }}
                </button>
                <p class="form-footer">
                    "Don't have an account? "
                    <A href="/signup">"Sign Up!"</A>
                </p>
            </form>
        </div>
    }
}
