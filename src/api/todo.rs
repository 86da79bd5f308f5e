//! Todo Resource Client
//!
//! `RemoteStore` over HTTP with `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;

use super::{ApiError, ApiResult};
use crate::config::ApiConfig;
use crate::models::{Todo, TodoPatch};
use crate::sync::RemoteStore;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateTodoArgs<'a> {
    title: &'a str,
}

// ========================
// Client
// ========================

/// HTTP client for the `/todos` resource
#[derive(Debug, Clone)]
pub struct HttpRemoteStore {
    client: Client,
    config: ApiConfig,
}

impl HttpRemoteStore {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Turn any non-2xx response into an error. `id` is the targeted todo, if any.
    async fn check(response: Response, id: Option<u32>) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
            return Err(ApiError::NotFound(id));
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait(?Send)]
impl RemoteStore for HttpRemoteStore {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        let response = self.client.get(self.config.todos_url()).send().await?;
        let response = Self::check(response, None).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, title: &str) -> ApiResult<Todo> {
        let response = self
            .client
            .post(self.config.todos_url())
            .json(&CreateTodoArgs { title })
            .send()
            .await?;
        let response = Self::check(response, None).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: u32, patch: &TodoPatch) -> ApiResult<Todo> {
        let response = self
            .client
            .patch(self.config.todo_url(id))
            .json(patch)
            .send()
            .await?;
        let response = Self::check(response, Some(id)).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let response = self.client.delete(self.config.todo_url(id)).send().await?;
        // Body is empty or a confirmation message; neither matters
        Self::check(response, Some(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_server_lib::TodoRepository;

    /// Serve a live todo server on an ephemeral port
    async fn spawn_server(repo: TodoRepository) -> HttpRemoteStore {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move { todo_server_lib::serve(listener, repo).await.expect("serve") });
        HttpRemoteStore::new(ApiConfig::new(format!("http://{}", addr)))
    }

    #[tokio::test]
    async fn test_list_seeded() {
        let store = spawn_server(TodoRepository::seeded()).await;

        let todos = store.list().await.expect("list");

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, 1);
        assert!(todos[1].is_done);
        assert!(todos[0].description.is_some());
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let store = spawn_server(TodoRepository::new()).await;

        let created = store.create("Ship it").await.expect("create");
        assert_eq!(created, Todo::new(1, "Ship it", false));

        let toggled = store.update(1, &TodoPatch::status(true)).await.expect("update");
        assert!(toggled.is_done);
        assert_eq!(toggled.title, "Ship it");

        let renamed = store.update(1, &TodoPatch::title("Shipped")).await.expect("rename");
        assert_eq!(renamed.title, "Shipped");
        assert!(renamed.is_done);

        store.delete(1).await.expect("delete");
        assert!(store.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn test_unknown_id_maps_to_not_found() {
        let store = spawn_server(TodoRepository::new()).await;

        assert_eq!(store.delete(5).await, Err(ApiError::NotFound(5)));
        assert_eq!(store.update(5, &TodoPatch::status(true)).await, Err(ApiError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_rejected_create_is_status_error() {
        let store = spawn_server(TodoRepository::new()).await;

        match store.create(&"x".repeat(60)).await {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 400);
                assert!(body.contains("title"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Bind then drop to get a port nobody listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let store = HttpRemoteStore::new(ApiConfig::new(format!("http://{}", addr)));

        assert!(matches!(store.list().await, Err(ApiError::Transport(_))));
    }
}
