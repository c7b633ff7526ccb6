//! Password Reset Endpoints
//!
//! Emailed reset link: request, verify, then change the password.

use reqwest::Method;
use serde::Serialize;
use todo_sync::SyncResult;

use super::ApiClient;

#[derive(Serialize)]
struct EmailArgs<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct TokenArgs<'a> {
    token: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordArgs<'a> {
    token: &'a str,
    new_password: &'a str,
}

/// Email a reset link to `email`
pub async fn send_reset_link(api: &ApiClient, email: &str) -> SyncResult<()> {
    let builder = api
        .request(Method::POST, "/forget-password/send-link")
        .json(&EmailArgs { email });
    api.send_empty(builder).await
}

/// Check that a reset token from the link is still valid
pub async fn verify_reset_token(api: &ApiClient, token: &str) -> SyncResult<()> {
    let builder = api
        .request(Method::POST, "/forget-password/verify-link")
        .json(&TokenArgs { token });
    api.send_empty(builder).await
}

pub async fn reset_password(api: &ApiClient, token: &str, new_password: &str) -> SyncResult<()> {
    let builder = api
        .request(Method::POST, "/forget-password/change-password")
        .json(&ChangePasswordArgs { token, new_password });
    api.send_empty(builder).await
}
