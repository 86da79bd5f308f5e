use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use todo_server_lib::TodoRepository;

/// Serve `repo` on an ephemeral port and return its base URL
async fn spawn_server(repo: TodoRepository) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { todo_server_lib::serve(listener, repo).await.expect("serve") });
    format!("http://{}", addr)
}

#[tokio::test]
async fn list_returns_seeded_todos() {
    let base = spawn_server(TodoRepository::seeded()).await;

    let response = reqwest::get(format!("{}/todos", base)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let todos: Vec<Value> = response.json().await.unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0]["id"], 1);
    assert_eq!(todos[1]["isDone"], true);
    assert!(todos[0]["createdAt"].is_string());
}

#[tokio::test]
async fn create_then_fetch() {
    let base = spawn_server(TodoRepository::new()).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/todos", base))
        .json(&json!({ "title": "Write tests" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "Write tests");
    assert_eq!(created["isDone"], false);
    assert!(created["description"].is_null());

    let fetched: Value = client
        .get(format!("{}/todos/1", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_rejects_invalid_bodies() {
    let base = spawn_server(TodoRepository::new()).await;
    let client = Client::new();

    for body in [
        json!({ "title": "" }),
        json!({ "title": "x".repeat(51) }),
        json!({ "title": "ok", "priority": 1 }),
        json!({ "description": "no title" }),
    ] {
        let response = client.post(format!("{}/todos", base)).json(&body).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {}", body);
        let error: Value = response.json().await.unwrap();
        assert_eq!(error["statusCode"], 400);
        assert_eq!(error["error"], "Bad Request");
    }

    let todos: Vec<Value> = client.get(format!("{}/todos", base)).send().await.unwrap().json().await.unwrap();
    assert!(todos.is_empty());
}

#[tokio::test]
async fn patch_updates_only_given_fields() {
    let base = spawn_server(TodoRepository::seeded()).await;
    let client = Client::new();

    let response = client
        .patch(format!("{}/todos/1", base))
        .json(&json!({ "isDone": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["isDone"], true);
    assert_eq!(updated["title"], "Study Axum");
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let base = spawn_server(TodoRepository::new()).await;
    let client = Client::new();

    let get = client.get(format!("{}/todos/9", base)).send().await.unwrap();
    assert_eq!(get.status(), StatusCode::NOT_FOUND);

    let patch = client
        .patch(format!("{}/todos/9", base))
        .json(&json!({ "isDone": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(patch.status(), StatusCode::NOT_FOUND);
    let error: Value = patch.json().await.unwrap();
    assert_eq!(error["statusCode"], 404);
    assert_eq!(error["message"], "Todo with ID 9 not found");

    let delete = client.delete(format!("{}/todos/9", base)).send().await.unwrap();
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let base = spawn_server(TodoRepository::new()).await;

    let client = Client::new();

    let response = client.get(format!("{}/todos/abc", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["statusCode"], 400);
    assert_eq!(error["error"], "Bad Request");
    assert!(error["message"].is_string());

    let patch = client
        .patch(format!("{}/todos/-1", base))
        .json(&json!({ "isDone": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(patch.status(), StatusCode::BAD_REQUEST);
    let error: Value = patch.json().await.unwrap();
    assert_eq!(error["statusCode"], 400);

    let delete = client.delete(format!("{}/todos/abc", base)).send().await.unwrap();
    assert_eq!(delete.status(), StatusCode::BAD_REQUEST);
    let error: Value = delete.json().await.unwrap();
    assert_eq!(error["error"], "Bad Request");
}

#[tokio::test]
async fn delete_removes_todo() {
    let base = spawn_server(TodoRepository::seeded()).await;
    let client = Client::new();

    let response = client.delete(format!("{}/todos/2", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Todo with ID 2 has been deleted.");

    let todos: Vec<Value> = client.get(format!("{}/todos", base)).send().await.unwrap().json().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["id"], 1);
}

#[tokio::test]
async fn cors_preflight_and_headers() {
    let base = spawn_server(TodoRepository::new()).await;
    let client = Client::new();

    let preflight = client
        .request(reqwest::Method::OPTIONS, format!("{}/todos/1", base))
        .header("Origin", "http://localhost:8080")
        .header("Access-Control-Request-Method", "PATCH")
        .send()
        .await
        .unwrap();
    assert_eq!(preflight.status(), StatusCode::NO_CONTENT);
    assert_eq!(preflight.headers()["access-control-allow-origin"], "*");
    assert!(preflight.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .contains("PATCH"));

    let list = client.get(format!("{}/todos", base)).send().await.unwrap();
    assert_eq!(list.headers()["access-control-allow-origin"], "*");
}
