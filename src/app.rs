//! Todo List Frontend App
//!
//! Provides the global store and session, then routes. Guards redirect on
//! sign-in and sign-out, so pages never navigate for the session themselves.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{PublicOnly, RequireAuth, ToastHost, HOME_PATH};
use crate::pages::{
    ForgotPasswordPage, LoginPage, NotFoundPage, ProfilePage, ResetPasswordPage, SignUpPage,
    TodosPage,
};
use crate::session::SessionContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    provide_context(Store::new(AppState::new()));

    let session = SessionContext::new();
    provide_context(session);
    session.check_auth();

    view! {
        <Router>
            <ToastHost />
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=HOME_PATH /> } />
                <Route
                    path=path!("/login")
                    view=|| view! { <PublicOnly><LoginPage /></PublicOnly> }
                />
                <Route
                    path=path!("/signup")
                    view=|| view! { <PublicOnly><SignUpPage /></PublicOnly> }
                />
                <Route
                    path=path!("/forgot-password")
                    view=|| view! { <PublicOnly><ForgotPasswordPage /></PublicOnly> }
                />
                <Route path=path!("/password-reset") view=ResetPasswordPage />
                <Route
                    path=path!("/todo")
                    view=|| view! { <RequireAuth><TodosPage /></RequireAuth> }
                />
                <Route
                    path=path!("/profile")
                    view=|| view! { <RequireAuth><ProfilePage /></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
