//! Request handlers. Each one locks the store, applies a single operation
//! and answers with a page or a redirect back to `/`.

use axum::{
    extract::{rejection::FormRejection, FromRequestParts, Path, State},
    http::{request::Parts, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use todo_core::TodoId;
use tracing::{debug, info};

use crate::error::ServerResult;
use crate::AppState;

/// Todo id taken from the `{id}` path segment.
///
/// Only plain ASCII digits match; anything else (`abc`, `+1`, `-1`, `1.5`)
/// is answered with 404 as if the route did not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoIdPath(pub TodoId);

impl<S> FromRequestParts<S> for TodoIdPath
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;
        match parse_id(&raw) {
            Some(id) => Ok(Self(id)),
            None => {
                debug!(segment = %raw, "id segment is not a plain integer");
                Err(StatusCode::NOT_FOUND)
            }
        }
    }
}

fn parse_id(raw: &str) -> Option<TodoId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Form bodies are decoded as raw pairs so a repeated field keeps its first
/// value instead of failing the whole decode.
type TaskForm = Result<Form<Vec<(String, String)>>, FormRejection>;

/// First `task` value in the form. Missing field and undecodable body both
/// count as an absent task.
fn submitted_task(form: TaskForm) -> String {
    match form {
        Ok(Form(fields)) => fields
            .into_iter()
            .find(|(name, _)| name == "task")
            .map(|(_, value)| value)
            .unwrap_or_default(),
        Err(rejection) => {
            debug!(%rejection, "form body not decoded, treating task as absent");
            String::new()
        }
    }
}

fn home() -> Redirect {
    Redirect::to("/")
}

pub async fn index(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let todos = state.store.read().await.list().to_vec();
    Ok(Html(state.templates.index(&todos)?))
}

pub async fn add_todo(State(state): State<AppState>, form: TaskForm) -> Redirect {
    let task = submitted_task(form);
    let mut store = state.store.write().await;
    match store.add(&task) {
        Some(todo) => info!(id = todo.id, task = %todo.task, "added todo"),
        None => debug!("ignored add"),
    }
    home()
}

pub async fn complete_todo(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
) -> Redirect {
    if state.store.write().await.toggle(id) {
        info!(id, "toggled todo");
    } else {
        debug!(id, "toggle requested for unknown todo");
    }
    home()
}

pub async fn delete_todo(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
) -> Redirect {
    match state.store.write().await.delete(id) {
        0 => debug!(id, "delete requested for unknown todo"),
        removed => info!(id, removed, "deleted todo"),
    }
    home()
}

pub async fn edit_form(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
) -> ServerResult<Response> {
    let todo = state.store.read().await.get(id).cloned();
    match todo {
        Some(todo) => Ok(Html(state.templates.edit(&todo)?).into_response()),
        None => {
            debug!(id, "edit requested for unknown todo");
            Ok(home().into_response())
        }
    }
}

pub async fn update_todo(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
    form: TaskForm,
) -> Redirect {
    let task = submitted_task(form);
    let mut store = state.store.write().await;
    match store.rename(id, &task) {
        Some(todo) if !task.is_empty() => info!(id, task = %todo.task, "renamed todo"),
        Some(_) => debug!(id, "ignored rename with empty task"),
        None => debug!(id, "rename requested for unknown todo"),
    }
    home()
}
