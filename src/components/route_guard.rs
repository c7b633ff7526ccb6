//! Route Guards
//!
//! Gate pages on the session: signed-in only, or signed-out only.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::session::use_session;

/// Path signed-in users land on
pub const HOME_PATH: &str = "/todo";
pub const LOGIN_PATH: &str = "/login";

/// Render `children` only for a signed-in user, else go to login
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let signed_in = Memo::new(move |_| session.user.with(|user| user.is_some()));

    move || {
        if session.is_checking_auth.get() {
            view! { <Splash /> }.into_any()
        } else if signed_in.get() {
            children().into_any()
        } else {
            view! { <Redirect path=LOGIN_PATH /> }.into_any()
        }
    }
}

/// Render `children` only while signed out, else go to the list
#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let signed_in = Memo::new(move |_| session.user.with(|user| user.is_some()));

    move || {
        if session.is_checking_auth.get() {
            view! { <Splash /> }.into_any()
        } else if signed_in.get() {
            view! { <Redirect path=HOME_PATH /> }.into_any()
        } else {
            children().into_any()
        }
    }
}

#[component]
pub fn Splash() -> impl IntoView {
    view! {
        <div class="splash">
            <h1>"Do it list!"</h1>
            <span class="spinner"></span>
        </div>
    }
}
