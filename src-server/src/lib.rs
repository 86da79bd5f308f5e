//! Todo Server
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: HTTP handlers

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::Instrument;

mod commands;
mod config;
mod domain;
mod repository;

pub use config::ServerConfig;
pub use domain::{DomainError, NewTodo, Todo, TodoChanges};
pub use repository::{Repository, TodoRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<TodoRepository>,
}

impl AppState {
    pub fn new(todos: TodoRepository) -> Self {
        Self {
            todos: Arc::new(todos),
        }
    }
}

/// Routes of the `/todos` resource with CORS and request tracing
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(commands::list_todos).post(commands::create_todo))
        .route(
            "/todos/:id",
            get(commands::get_todo)
                .patch(commands::update_todo)
                .delete(commands::delete_todo),
        )
        .layer(middleware::from_fn(cors_middleware))
        .layer(middleware::from_fn(request_tracing_middleware))
        .with_state(state)
}

/// Allow the browser front end to call from any origin
async fn cors_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PATCH, DELETE, OPTIONS"),
    );
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("content-type"));
    response
}

async fn request_tracing_middleware(request: Request<Body>, next: Next) -> Response {
    let span = tracing::info_span!(
        "http.request",
        method = %request.method(),
        route = %request.uri().path(),
    );

    async move {
        let response = next.run(request).await;
        tracing::info!(status = response.status().as_u16(), "request finished");
        response
    }
    .instrument(span)
    .await
}

/// Install the fmt subscriber with `config.log_filter`
pub fn init_tracing(config: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config::DEFAULT_LOG));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Bind `config.addr` and serve until the process stops
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let repo = if config.seed {
        TodoRepository::seeded()
    } else {
        TodoRepository::new()
    };
    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %listener.local_addr()?, seed = config.seed, "todo server listening");
    serve(listener, repo).await
}

/// Serve `repo` on an already bound listener
pub async fn serve(listener: TcpListener, repo: TodoRepository) -> std::io::Result<()> {
    axum::serve(listener, build_router(AppState::new(repo))).await
}
