//! Forgot Password Page
//!
//! Requests an emailed reset link.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use todo_sync::Notice;

use crate::api::{self, ApiClient};
use crate::store::{store_notify, use_app_store};

const SEND_FAILED: &str = "Failed to send reset link. Please try again.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let store = use_app_store();
    let (email, set_email) = signal(String::new());
    let (is_submitting, set_submitting) = signal(false);
    let (sent_to, set_sent_to) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let email = email.get_untracked().trim().to_string();
        set_submitting.set(true);
        spawn_local(async move {
            match api::send_reset_link(&ApiClient::default(), &email).await {
                Ok(()) => {
                    store_notify(&store, Notice::success("Password reset link sent"));
                    let _ = set_sent_to.try_set(Some(email));
                }
                Err(err) => {
                    log::warn!("[RESET] send link failed: {}", err);
                    store_notify(&store, Notice::error(err.user_message(SEND_FAILED)));
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h1>"Forget Password"</h1>
                {move || match sent_to.get() {
                    Some(address) => view! {
                        <p class="form-hint">"Check " <strong>{address}</strong> " for a reset link."</p>
                    }.into_any(),
                    None => view! {
                        <p class="form-hint">"We will send you a password reset link to your email"</p>
                    }.into_any(),
                }}
                <input
                    type="email"
                    placeholder="Enter your email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <button type="submit" class="submit-btn" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Sending..." } else { "Send Password Reset Link" }}
                </button>
                <p class="form-footer">
                    <A href="/login">"Go back to login page"</A>
                </p>
            </form>
        </div>
    }
}
