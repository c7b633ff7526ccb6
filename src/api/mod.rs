//! REST API Bindings
//!
//! Frontend bindings to the to-do REST API, organized by domain.

mod auth;
mod password_reset;
mod todo;
mod user;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use todo_sync::{SyncError, SyncResult};

use crate::config::AppConfig;

// Re-export all public items
pub use auth::*;
pub use password_reset::*;
pub use todo::HttpTodoService;
pub use user::*;

/// localStorage key holding the bearer token
const TOKEN_KEY: &str = "authToken";

/// Error body returned by the API on non-2xx responses
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Thin JSON client over the API root
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(AppConfig::from_env().api_base_url)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json");
        // Session cookie travels alongside the bearer token
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        match load_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> SyncResult<T> {
        let response = send(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| SyncError::Decode(e.to_string()))
    }

    async fn send_empty(&self, builder: RequestBuilder) -> SyncResult<()> {
        send(builder).await.map(|_| ())
    }
}

async fn send(builder: RequestBuilder) -> SyncResult<Response> {
    let response = builder
        .send()
        .await
        .map_err(|e| SyncError::Transport(e.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    Err(SyncError::Service { status: status.as_u16(), message })
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn load_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
