//! Error type for the HTTP layer.
//!
//! # Design
//! The store itself never fails; everything here comes from startup
//! (configuration, binding the listener) or from template rendering. A
//! rendering failure becomes a bare 500 so template internals never reach
//! the browser. The detail goes to the log instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
