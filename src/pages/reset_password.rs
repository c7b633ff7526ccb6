//! Reset Password Page
//!
//! Target of the emailed link (`/password-reset?token=...`). The token is
//! verified once before the form is shown.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_query_map;
use todo_sync::Notice;

use crate::api::{self, ApiClient};
use crate::components::LOGIN_PATH;
use crate::store::{store_notify, use_app_store};
use crate::validation::{check_new_password, validate_password};

const INVALID_LINK: &str = "Invalid or expired reset link.";
const RESET_FAILED: &str = "Password reset failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkState {
    Checking,
    Valid,
    Invalid,
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let store = use_app_store();
    let query = use_query_map();

    let token = Memo::new(move |_| query.with(|params| params.get("token")));
    let (link, set_link) = signal(LinkState::Checking);
    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (is_submitting, set_submitting) = signal(false);
    let (is_done, set_done) = signal(false);

    Effect::new(move |_| {
        let Some(token) = token.get() else {
            set_link.set(LinkState::Invalid);
            return;
        };
        set_link.set(LinkState::Checking);
        spawn_local(async move {
            let state = match api::verify_reset_token(&ApiClient::default(), &token).await {
                Ok(()) => LinkState::Valid,
                Err(err) => {
                    log::warn!("[RESET] link rejected: {}", err);
                    store_notify(&store, Notice::error(err.user_message(INVALID_LINK)));
                    LinkState::Invalid
                }
            };
            let _ = set_link.try_set(state);
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let Some(token) = token.get_untracked() else {
            store_notify(&store, Notice::error("Invalid reset link."));
            return;
        };
        let password = password.get_untracked();
        if let Err(problem) = check_new_password(&password, &confirmation.get_untracked()) {
            store_notify(&store, Notice::error(problem));
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            match api::reset_password(&ApiClient::default(), &token, &password).await {
                Ok(()) => {
                    store_notify(&store, Notice::success("Password reset successful!"));
                    let _ = set_done.try_set(true);
                }
                Err(err) => {
                    log::warn!("[RESET] change password failed: {}", err);
                    store_notify(&store, Notice::error(err.user_message(RESET_FAILED)));
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    // Live hints while typing
    let password_hint = move || {
        password.with(|text| {
            if text.is_empty() {
                None
            } else {
                validate_password(text).err()
            }
        })
    };
    let confirmation_hint = move || {
        let matches = password.with(|text| confirmation.with(|again| again.is_empty() || again == text));
        (!matches).then_some("Passwords do not match")
    };

    view! {
        <div class="login-page">
            <Show when=move || is_done.get()>
                <Redirect path=LOGIN_PATH />
            </Show>
            {move || match link.get() {
                LinkState::Checking => view! {
                    <div class="splash"><span class="spinner"></span></div>
                }.into_any(),
                LinkState::Invalid => view! {
                    <div class="link-expired">
                        <h1>"Reset Link Expired"</h1>
                        <p>
                            "This password reset link is invalid or has expired. "
                            "Please request a new password reset to continue."
                        </p>
                        <A href="/forgot-password">"Request New Link"</A>
                        <A href="/">"Go home instead"</A>
                    </div>
                }.into_any(),
                LinkState::Valid => view! {
                    <form class="login-form" on:submit=on_submit>
                        <h1>"Password Reset"</h1>
                        <input
                            type="password"
                            placeholder="Enter new password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        {move || password_hint().map(|hint| view! { <p class="field-error">{hint}</p> })}
                        <input
                            type="password"
                            placeholder="Confirm new password"
                            required
                            prop:value=move || confirmation.get()
                            on:input=move |ev| set_confirmation.set(event_target_value(&ev))
                        />
                        {move || confirmation_hint().map(|hint| view! { <p class="field-error">{hint}</p> })}
                        <button type="submit" class="submit-btn" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() { "Resetting..." } else { "Reset Password" }}
                        </button>
                    </form>
                }.into_any(),
            }}
        </div>
    }
}
