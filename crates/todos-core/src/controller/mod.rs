//! Todo Controller
//!
//! Runs each user action against the remote gateway, bracketing the call
//! with the matching `begin_*` / `finish_*` transition on the view state.

mod clock;


use std::rc::Rc;

use futures::future::join_all;

pub use clock::Clock;

use crate::domain::{FilterType, TodoId, UserId};
use crate::gateway::TodoGateway;
use crate::state::{StateCell, ERROR_DISMISS_DELAY};

/// Root controller for one user's todo list
pub struct TodoController<G, S, C> {
    gateway: Rc<G>,
    state: S,
    clock: C,
    user_id: UserId,
}

impl<G, S: Clone, C: Clone> Clone for TodoController<G, S, C> {
    fn clone(&self) -> Self {
        Self {
            gateway: Rc::clone(&self.gateway),
            state: self.state.clone(),
            clock: self.clock.clone(),
            user_id: self.user_id,
        }
    }
}

impl<G, S, C> TodoController<G, S, C>
where
    G: TodoGateway,
    S: StateCell,
    C: Clock,
{
    pub fn new(gateway: G, state: S, clock: C, user_id: UserId) -> Self {
        Self {
            gateway: Rc::new(gateway),
            state,
            clock,
            user_id,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetch the user's todos into the state
    pub async fn load(&self) {
        if self.state.update(|s| s.begin_load()).is_none() {
            return;
        }
        log::debug!("loading todos for user {}", self.user_id);
        let result = self.gateway.list(self.user_id).await;
        match &result {
            Ok(todos) => log::info!("loaded {} todos", todos.len()),
            Err(e) => log::warn!("failed to load todos: {}", e),
        }
        self.state.update(|s| s.finish_load(result));
    }

    /// Create a todo from the current input text
    pub async fn submit(&self) {
        let placeholder_id = self.clock.now_millis();
        let draft = self
            .state
            .update(|s| s.begin_submit(self.user_id, placeholder_id))
            .flatten();
        let Some(draft) = draft else {
            return;
        };
        let result = self.gateway.create(&draft).await;
        match &result {
            Ok(todo) => log::info!("created todo {}", todo.id),
            Err(e) => log::warn!("failed to create todo: {}", e),
        }
        self.state.update(|s| s.finish_submit(result));
    }

    /// Delete one todo
    pub async fn delete(&self, id: TodoId) {
        if self.state.update(|s| s.begin_delete(id)) != Some(true) {
            log::debug!("delete of todo {} skipped", id);
            return;
        }
        let result = self.gateway.delete(id).await;
        match &result {
            Ok(()) => log::info!("deleted todo {}", id),
            Err(e) => log::warn!("failed to delete todo {}: {}", id, e),
        }
        self.state.update(|s| s.finish_delete(id, result));
    }

    /// Delete every completed todo concurrently.
    ///
    /// The list is not pruned up front: each todo leaves the list only when
    /// its own delete succeeds, so failures stay visible.
    pub async fn clear_completed(&self) {
        let ids = self.state.read(|s| s.completed_ids()).unwrap_or_default();
        if ids.is_empty() {
            return;
        }
        log::debug!("clearing {} completed todos", ids.len());
        join_all(ids.into_iter().map(|id| self.delete(id))).await;
    }

    pub fn select_filter(&self, filter: FilterType) {
        self.state.update(|s| s.set_filter(filter));
    }

    /// Select the filter named by a location hash (`#/active`, ...)
    pub fn follow_hash(&self, hash: &str) {
        self.select_filter(FilterType::from_hash(hash));
    }

    pub fn set_new_title(&self, title: String) {
        self.state.update(|s| s.set_new_title(title));
    }

    pub fn dismiss_error(&self) {
        self.state.update(|s| s.dismiss_error());
    }

    /// Wait [`ERROR_DISMISS_DELAY`], then clear notice `seq` if it is still shown
    pub async fn expire_error(&self, seq: u64) {
        self.clock.sleep(ERROR_DISMISS_DELAY).await;
        if self.state.update(|s| s.expire_error(seq)) == Some(true) {
            log::debug!("notice #{} expired", seq);
        }
    }
}
