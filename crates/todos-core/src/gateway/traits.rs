//! Gateway Layer - Core Trait
//!
//! Abstract interface to the remote todo collection.
//! Implementations can use HTTP, an in-memory fake, etc.

use async_trait::async_trait;

use super::GatewayResult;
use crate::domain::{NewTodo, Todo, TodoId, UserId};

/// Remote todo collection scoped by user.
///
/// Each operation is a single call with no retry. Futures are not `Send`:
/// the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait TodoGateway {
    /// All todos owned by `user_id`
    async fn list(&self, user_id: UserId) -> GatewayResult<Vec<Todo>>;

    /// Create a todo; returns the stored record with its server id
    async fn create(&self, draft: &NewTodo) -> GatewayResult<Todo>;

    /// Delete a todo by id
    async fn delete(&self, id: TodoId) -> GatewayResult<()>;
}
