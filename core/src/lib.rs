//! In-memory todo collection.
//!
//! # Overview
//! `TodoStore` holds an ordered list of `Todo` records and applies add,
//! toggle, rename and delete to it. Nothing here performs I/O or blocks,
//! so the HTTP layer decides how the store is shared and locked.
//!
//! # Design
//! - Invalid input (empty task text, unknown id) is absorbed as a no-op.
//!   Operations report what happened through their return values instead
//!   of an error type.
//! - Ids are `max + 1` over the current contents, so numbering restarts at
//!   1 once the store is drained.

pub mod store;
pub mod types;

pub use store::TodoStore;
pub use types::{seed_todos, Todo, TodoId};
