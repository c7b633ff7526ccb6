//! Todos Page
//!
//! Owns the list controller for as long as the page is on screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use todo_sync::Notice;

use crate::components::{ConfirmModal, SearchBox, TodoForm, TodoList};
use crate::context::TodosContext;
use crate::session::use_session;
use crate::store::{store_notify, use_app_store};

const LOGOUT_FAILED: &str = "Logout failed! Please try again.";

#[component]
pub fn TodosPage() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();

    let todos = TodosContext::new(store);
    provide_context(todos);
    todos.mount();
    on_cleanup(move || todos.unmount());

    let full_name = move || {
        session.user.with(|user| user.as_ref().map(|user| user.full_name.clone()).unwrap_or_default())
    };

    let logout = move |_| {
        spawn_local(async move {
            match session.logout().await {
                Ok(()) => store_notify(&store, Notice::success("Logout successful")),
                Err(err) => {
                    log::warn!("[SESSION] logout failed: {}", err);
                    store_notify(&store, Notice::error(err.user_message(LOGOUT_FAILED)));
                }
            }
        });
    };

    view! {
        <div class="todos-page">
            <header class="todos-header">
                <div class="greeting">
                    <h1>"Hello!"</h1>
                    <h1 class="full-name">{full_name}"!"</h1>
                </div>
                <SearchBox />
                <A href="/profile" attr:class="profile-link">"Profile"</A>
                <button class="logout-btn" on:click=logout>"Logout"</button>
            </header>
            <main class="todos-main">
                <TodoList />
            </main>
            <button class="add-fab" title="Add todo" on:click=move |_| todos.open_add()>
                "+"
            </button>
            <TodoForm />
            <ConfirmModal
                open=Signal::derive(move || todos.delete_target.with(|target| target.is_some()))
                title="Delete this todo?"
                detail="This action can't be undone."
                confirm_label="Delete"
                on_confirm=Callback::new(move |_| todos.confirm_delete())
                on_cancel=Callback::new(move |_| todos.cancel_delete())
            />
        </div>
    }
}
