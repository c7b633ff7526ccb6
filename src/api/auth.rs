//! Auth Endpoints
//!
//! Session check, signup, login and logout.

use reqwest::{Method, Response};
use serde::{Deserialize, Serialize};
use todo_sync::SyncResult;

use super::{clear_token, send, store_token, ApiClient};
use crate::models::User;

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignupArgs<'a> {
    full_name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Deserialize)]
struct MeResponse {
    user: User,
}

/// Current user for the stored session
pub async fn fetch_me(api: &ApiClient) -> SyncResult<User> {
    let me: MeResponse = api.send_json(api.request(Method::GET, "/me")).await?;
    Ok(me.user)
}

/// Sign in; keeps the returned bearer token, if any
pub async fn login(api: &ApiClient, email: &str, password: &str) -> SyncResult<()> {
    let builder = api
        .request(Method::POST, "/auth/login")
        .json(&LoginArgs { email, password });
    keep_token(send(builder).await?).await;
    Ok(())
}

/// Create an account; the new session is kept like a login
pub async fn signup(api: &ApiClient, full_name: &str, email: &str, password: &str) -> SyncResult<()> {
    let builder = api
        .request(Method::POST, "/auth/signup")
        .json(&SignupArgs { full_name, email, password });
    keep_token(send(builder).await?).await;
    Ok(())
}

async fn keep_token(response: Response) {
    // Cookie-only deployments answer without a body
    if let Ok(TokenResponse { token: Some(token) }) = response.json::<TokenResponse>().await {
        store_token(&token);
    }
}

/// Sign out and forget the bearer token
pub async fn logout(api: &ApiClient) -> SyncResult<()> {
    api.send_empty(api.request(Method::POST, "/auth/logout")).await?;
    clear_token();
    Ok(())
}
