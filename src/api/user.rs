//! Account Endpoints

use reqwest::Method;
use todo_sync::SyncResult;

use super::{clear_token, ApiClient};
use crate::models::UserUpdate;

/// Update profile fields or the password of the signed-in user
pub async fn update_me(api: &ApiClient, update: &UserUpdate) -> SyncResult<()> {
    api.send_empty(api.request(Method::PUT, "/me").json(update)).await
}

/// Delete the signed-in account and forget the bearer token
pub async fn delete_me(api: &ApiClient) -> SyncResult<()> {
    api.send_empty(api.request(Method::DELETE, "/me")).await?;
    clear_token();
    Ok(())
}
