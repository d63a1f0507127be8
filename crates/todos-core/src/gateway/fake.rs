//! In-memory gateway for tests.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use async_trait::async_trait;
use futures::channel::oneshot;

use super::{GatewayError, GatewayResult, TodoGateway};
use crate::domain::{NewTodo, Todo, TodoId, UserId};

/// A recorded gateway call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(UserId),
    Create(NewTodo),
    Delete(TodoId),
}

/// Stores todos in memory and fails on demand
#[derive(Default)]
pub struct FakeGateway {
    todos: RefCell<Vec<Todo>>,
    next_id: Cell<TodoId>,
    calls: RefCell<Vec<Call>>,
    fail_list: Cell<bool>,
    fail_create: Cell<bool>,
    fail_delete: RefCell<HashSet<TodoId>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeGateway {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            todos: RefCell::new(todos),
            next_id: Cell::new(next_id),
            ..Default::default()
        }
    }

    pub fn fail_list(&self) {
        self.fail_list.set(true);
    }

    pub fn fail_create(&self) {
        self.fail_create.set(true);
    }

    pub fn fail_delete(&self, id: TodoId) {
        self.fail_delete.borrow_mut().insert(id);
    }

    /// Make the next call wait until the returned sender fires (or is dropped)
    pub fn hold(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn stored(&self) -> Vec<Todo> {
        self.todos.borrow().clone()
    }

    async fn enter(&self, call: Call) {
        self.calls.borrow_mut().push(call);
        let gate = self.gate.borrow_mut().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }
}

#[async_trait(?Send)]
impl TodoGateway for FakeGateway {
    async fn list(&self, user_id: UserId) -> GatewayResult<Vec<Todo>> {
        self.enter(Call::List(user_id)).await;
        if self.fail_list.get() {
            return Err(GatewayError::Status(500));
        }
        let todos = self.todos.borrow();
        Ok(todos.iter().filter(|t| t.user_id == user_id).cloned().collect())
    }

    async fn create(&self, draft: &NewTodo) -> GatewayResult<Todo> {
        self.enter(Call::Create(draft.clone())).await;
        if self.fail_create.get() {
            return Err(GatewayError::Status(500));
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let todo = Todo {
            id,
            title: draft.title.clone(),
            completed: draft.completed,
            user_id: draft.user_id,
        };
        self.todos.borrow_mut().push(todo.clone());
        Ok(todo)
    }

    async fn delete(&self, id: TodoId) -> GatewayResult<()> {
        self.enter(Call::Delete(id)).await;
        if self.fail_delete.borrow().contains(&id) {
            return Err(GatewayError::Status(404));
        }
        self.todos.borrow_mut().retain(|t| t.id != id);
        Ok(())
    }
}
