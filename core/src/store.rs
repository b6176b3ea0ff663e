//! Ordered, in-memory collection of todos.
//!
//! # Design
//! Records live in a `Vec` in insertion order, which is also display order.
//! Every operation is a linear scan. Mutating methods take `&mut self`; the
//! caller supplies whatever lock the deployment needs.

use crate::types::{seed_todos, Todo, TodoId};

/// The authoritative list of todos for one process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the three example records.
    pub fn seeded() -> Self {
        Self::from_todos(seed_todos())
    }

    /// Wrap existing records. Ids are assumed unique.
    pub fn from_todos(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// First record with `id`, if any.
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Append a new, uncompleted todo. Returns `None` without touching the
    /// store when `task` is empty or the id space above the current maximum
    /// is exhausted.
    pub fn add(&mut self, task: &str) -> Option<&Todo> {
        if task.is_empty() {
            return None;
        }
        let id = self.next_id()?;
        self.todos.push(Todo::new(id, task));
        self.todos.last()
    }

    /// Flip `completed` on the matching todo. Returns `false` if no todo has
    /// that id.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }

    /// Remove every todo with `id` and return how many were removed.
    pub fn delete(&mut self, id: TodoId) -> usize {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        before - self.todos.len()
    }

    /// Replace the task text of the matching todo.
    ///
    /// Returns `None` when no todo has `id`. An empty `new_task` leaves the
    /// record as it was but still returns it.
    pub fn rename(&mut self, id: TodoId, new_task: &str) -> Option<&Todo> {
        let todo = self.todos.iter_mut().find(|todo| todo.id == id)?;
        if !new_task.is_empty() {
            todo.task = new_task.to_string();
        }
        Some(&*todo)
    }

    fn next_id(&self) -> Option<TodoId> {
        self.todos.iter().map(|todo| todo.id).max().unwrap_or(0).checked_add(1)
    }
}
