//! Server-rendered todo list over an in-memory `TodoStore`.
//!
//! # Design
//! - The store is created by the caller and shared through `AppState` behind
//!   a single `RwLock`. Every mutation takes the write half, so concurrent
//!   adds cannot compute the same id.
//! - Handlers clone what they need to render and drop the lock first.
//! - Invalid input never produces an error page. Unknown ids and empty task
//!   text fall through to a redirect home.

pub mod config;
pub mod error;
pub mod render;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use todo_core::TodoStore;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::render::Templates;

pub type Db = Arc<RwLock<TodoStore>>;

#[derive(Clone)]
pub struct AppState {
    pub store: Db,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(store: TodoStore, debug: bool) -> ServerResult<Self> {
        Ok(Self {
            store: Arc::new(RwLock::new(store)),
            templates: Arc::new(Templates::new(debug)?),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/add", post(routes::add_todo))
        .route("/complete/{id}", get(routes::complete_todo))
        .route("/delete/{id}", get(routes::delete_todo))
        .route("/edit/{id}", get(routes::edit_form).post(routes::update_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router over a freshly seeded store.
pub fn app() -> ServerResult<Router> {
    Ok(router(AppState::new(TodoStore::seeded(), false)?))
}

pub async fn run(listener: TcpListener, config: &ServerConfig) -> ServerResult<()> {
    let state = AppState::new(TodoStore::seeded(), config.debug)?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
