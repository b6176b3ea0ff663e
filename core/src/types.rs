//! Domain record for the todo store.
//!
//! # Design
//! `Todo` is plain owned data so the server can clone records out of the
//! store and release its lock before rendering. The same type is serialized
//! into template contexts and test vectors.

use serde::{Deserialize, Serialize};

/// Identifier assigned by `TodoStore`. Always positive.
pub type TodoId = u64;

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub task: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: TodoId, task: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
            completed: false,
        }
    }
}

/// Records installed at process start.
pub fn seed_todos() -> Vec<Todo> {
    vec![
        Todo::new(1, "Learn Flask"),
        Todo {
            id: 2,
            task: "Build a todo app".to_string(),
            completed: true,
        },
        Todo::new(3, "Style with CSS"),
    ]
}
