//! Todo Endpoints
//!
//! `TodoService` over `/todos`.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use todo_sync::{ListRequest, Priority, SyncResult, Todo, TodoPage, TodoPatch, TodoService};

use super::ApiClient;

#[derive(Serialize)]
struct CreateTodoArgs<'a> {
    title: &'a str,
    priority: Priority,
}

#[derive(Deserialize)]
struct CreatedTodo {
    todo: Todo,
}

#[derive(Debug, Clone)]
pub struct HttpTodoService {
    api: ApiClient,
}

impl HttpTodoService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

fn todo_path(id: &str) -> String {
    format!("/todos/{}", utf8_percent_encode(id, NON_ALPHANUMERIC))
}

#[async_trait(?Send)]
impl TodoService for HttpTodoService {
    async fn list_todos(&self, request: &ListRequest) -> SyncResult<TodoPage> {
        let builder = self.api.request(Method::GET, "/todos").query(request);
        self.api.send_json(builder).await
    }

    async fn create_todo(&self, title: &str, priority: Priority) -> SyncResult<Todo> {
        let builder = self
            .api
            .request(Method::POST, "/todos")
            .json(&CreateTodoArgs { title, priority });
        let created: CreatedTodo = self.api.send_json(builder).await?;
        Ok(created.todo)
    }

    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> SyncResult<()> {
        let builder = self.api.request(Method::PUT, &todo_path(id)).json(patch);
        self.api.send_empty(builder).await
    }

    async fn delete_todo(&self, id: &str) -> SyncResult<()> {
        let builder = self.api.request(Method::DELETE, &todo_path(id));
        self.api.send_empty(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_path_encodes_id() {
        assert_eq!(todo_path("65f0c0ffee"), "/todos/65f0c0ffee");
        assert_eq!(todo_path("a/b c"), "/todos/a%2Fb%20c");
    }

    #[test]
    fn test_create_args_shape() {
        let json = serde_json::to_string(&CreateTodoArgs { title: "Buy milk", priority: Priority::High }).unwrap();
        assert_eq!(json, r#"{"title":"Buy milk","priority":"high"}"#);
    }
}
