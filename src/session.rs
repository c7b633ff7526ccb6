//! Session Context
//!
//! Signed-in user shared via Leptos Context API. Checked once on mount,
//! cleared on logout or account deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::SyncResult;

use crate::api::{self, ApiClient};
use crate::models::{User, UserUpdate};

#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Signed-in user - read
    pub user: ReadSignal<Option<User>>,
    /// Signed-in user - write
    set_user: WriteSignal<Option<User>>,
    /// True until the first `/me` check resolves
    pub is_checking_auth: ReadSignal<bool>,
    set_checking_auth: WriteSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (user, set_user) = signal(None::<User>);
        let (is_checking_auth, set_checking_auth) = signal(true);
        Self { user, set_user, is_checking_auth, set_checking_auth }
    }

    /// Resolve the stored session in the background
    pub fn check_auth(&self) {
        let this = *self;
        spawn_local(async move {
            match api::fetch_me(&ApiClient::default()).await {
                Ok(user) => {
                    log::debug!("[SESSION] signed in as {}", user.email);
                    this.set_user.set(Some(user));
                }
                Err(err) => {
                    log::debug!("[SESSION] no session: {}", err);
                    this.set_user.set(None);
                }
            }
            this.set_checking_auth.set(false);
        });
    }

    pub async fn login(&self, email: &str, password: &str) -> SyncResult<()> {
        let api = ApiClient::default();
        api::login(&api, email, password).await?;
        let user = api::fetch_me(&api).await?;
        self.set_user.set(Some(user));
        Ok(())
    }

    /// Create an account and sign straight in
    pub async fn signup(&self, full_name: &str, email: &str, password: &str) -> SyncResult<()> {
        let api = ApiClient::default();
        api::signup(&api, full_name, email, password).await?;
        let user = api::fetch_me(&api).await?;
        self.set_user.set(Some(user));
        Ok(())
    }

    /// Merge an accepted update into the signed-in user
    pub fn update_user(&self, update: &UserUpdate) {
        self.set_user.update(|user| {
            if let Some(user) = user {
                update.apply_to(user);
            }
        });
    }

    /// Send a profile update, then mirror it locally
    pub async fn update_profile(&self, update: UserUpdate) -> SyncResult<()> {
        api::update_me(&ApiClient::default(), &update).await?;
        self.update_user(&update);
        Ok(())
    }

    pub async fn delete_account(&self) -> SyncResult<()> {
        api::delete_me(&ApiClient::default()).await?;
        self.set_user.set(None);
        Ok(())
    }

    pub async fn logout(&self) -> SyncResult<()> {
        api::logout(&ApiClient::default()).await?;
        self.set_user.set(None);
        Ok(())
    }
}

/// Get the session from context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
