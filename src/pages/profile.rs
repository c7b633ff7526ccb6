//! Profile Page
//!
//! Shows the signed-in user and lets them change name, email or password,
//! or delete the account.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use todo_sync::Notice;

use crate::components::{ConfirmModal, Modal, HOME_PATH};
use crate::models::UserUpdate;
use crate::session::{use_session, SessionContext};
use crate::store::{store_notify, use_app_store, AppStore};
use crate::validation::check_new_password;

const UPDATE_FAILED: &str = "An error occurred";

/// Which edit dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileDialog {
    Name,
    Email,
    Password,
    DeleteAccount,
}

/// Send `update`, toast the outcome, then run `on_done` if it was accepted
fn submit_update(
    session: SessionContext,
    store: AppStore,
    update: UserUpdate,
    on_done: impl FnOnce() + 'static,
) {
    spawn_local(async move {
        match session.update_profile(update).await {
            Ok(()) => {
                store_notify(&store, Notice::success("Information updated successfully"));
                on_done();
            }
            Err(err) => {
                log::warn!("[PROFILE] update failed: {}", err);
                store_notify(&store, Notice::error(err.user_message(UPDATE_FAILED)));
            }
        }
    });
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();

    let (dialog, set_dialog) = signal(None::<ProfileDialog>);
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (old_password, set_old_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());

    let is_open = move |which: ProfileDialog| Signal::derive(move || dialog.get() == Some(which));
    let close = Callback::new(move |_: ()| set_dialog.set(None));
    let close_after = move || {
        let _ = set_dialog.try_set(None);
    };

    let open_name = move |_| {
        set_full_name.set(session.user.with_untracked(|user| {
            user.as_ref().map(|user| user.full_name.clone()).unwrap_or_default()
        }));
        set_dialog.set(Some(ProfileDialog::Name));
    };
    let open_email = move |_| {
        set_email.set(session.user.with_untracked(|user| {
            user.as_ref().map(|user| user.email.clone()).unwrap_or_default()
        }));
        set_dialog.set(Some(ProfileDialog::Email));
    };
    let open_password = move |_| {
        set_old_password.set(String::new());
        set_new_password.set(String::new());
        set_confirmation.set(String::new());
        set_dialog.set(Some(ProfileDialog::Password));
    };

    let save_name = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = full_name.get_untracked().trim().to_string();
        if name.is_empty() {
            store_notify(&store, Notice::error("Name can't be empty"));
            return;
        }
        submit_update(session, store, UserUpdate::full_name(name), close_after);
    };
    let save_email = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked().trim().to_string();
        if address.is_empty() {
            store_notify(&store, Notice::error("Email can't be empty"));
            return;
        }
        submit_update(session, store, UserUpdate::email(address), close_after);
    };
    let save_password = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_password = new_password.get_untracked();
        if let Err(problem) = check_new_password(&new_password, &confirmation.get_untracked()) {
            store_notify(&store, Notice::error(problem));
            return;
        }
        let update = UserUpdate::password(old_password.get_untracked(), new_password);
        submit_update(session, store, update, close_after);
    };

    let delete_account = Callback::new(move |_: ()| {
        set_dialog.set(None);
        spawn_local(async move {
            match session.delete_account().await {
                Ok(()) => store_notify(&store, Notice::success("Account deleted successfully")),
                Err(err) => {
                    log::warn!("[PROFILE] delete failed: {}", err);
                    store_notify(&store, Notice::error(err.user_message("Account deletion failed")));
                }
            }
        });
    });

    let shown_name = move || session.user.with(|user| user.as_ref().map(|user| user.full_name.clone()));
    let shown_email = move || session.user.with(|user| user.as_ref().map(|user| user.email.clone()));

    view! {
        <div class="profile-page">
            <header class="page-header">
                <A href=HOME_PATH attr:class="back-link">"← Back to list"</A>
                <h1>"Profile"</h1>
            </header>

            <section class="profile-card">
                <div class="profile-row">
                    <span class="profile-label">"Name"</span>
                    <span class="profile-value">{shown_name}</span>
                    <button class="edit-btn" on:click=open_name>"Edit"</button>
                </div>
                <div class="profile-row">
                    <span class="profile-label">"Email"</span>
                    <span class="profile-value">{shown_email}</span>
                    <button class="edit-btn" on:click=open_email>"Edit"</button>
                </div>
                <div class="profile-row">
                    <span class="profile-label">"Password"</span>
                    <span class="profile-value">"••••••••"</span>
                    <button class="edit-btn" on:click=open_password>"Change"</button>
                </div>
                <button
                    class="danger-btn"
                    on:click=move |_| set_dialog.set(Some(ProfileDialog::DeleteAccount))
                >
                    "Delete account"
                </button>
            </section>

            <Modal open=is_open(ProfileDialog::Name) on_close=close>
                <form class="todo-form" on:submit=save_name>
                    <h2>"Edit name"</h2>
                    <input
                        type="text"
                        required
                        prop:value=move || full_name.get()
                        on:input=move |ev| set_full_name.set(event_target_value(&ev))
                    />
                    <button type="submit" class="submit-btn">"Save"</button>
                </form>
            </Modal>

            <Modal open=is_open(ProfileDialog::Email) on_close=close>
                <form class="todo-form" on:submit=save_email>
                    <h2>"Edit email"</h2>
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <button type="submit" class="submit-btn">"Save"</button>
                </form>
            </Modal>

            <Modal open=is_open(ProfileDialog::Password) on_close=close>
                <form class="todo-form" on:submit=save_password>
                    <h2>"Change password"</h2>
                    <input
                        type="password"
                        placeholder="Current password"
                        required
                        prop:value=move || old_password.get()
                        on:input=move |ev| set_old_password.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="New password"
                        required
                        prop:value=move || new_password.get()
                        on:input=move |ev| set_new_password.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Confirm new password"
                        required
                        prop:value=move || confirmation.get()
                        on:input=move |ev| set_confirmation.set(event_target_value(&ev))
                    />
                    <button type="submit" class="submit-btn">"Update password"</button>
                </form>
            </Modal>

            <ConfirmModal
                open=is_open(ProfileDialog::DeleteAccount)
                title="Delete your account?"
                detail="All of your todos will be removed. This action can't be undone."
                confirm_label="Delete account"
                on_confirm=delete_account
                on_cancel=close
            />
        </div>
    }
}
