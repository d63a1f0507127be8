//! Domain Layer
//!
//! Core entities of the todo list.
//! No I/O here; only serde for the wire shape.

mod error;
mod filter;
mod todo;

pub use error::TodoError;
pub use filter::{filter_todos, FilterType};
pub use todo::{NewTodo, Todo, TodoId, UserId};
