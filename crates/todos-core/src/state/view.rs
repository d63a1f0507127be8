//! Todo View State
//!
//! Everything the root view renders from, with one transition per user
//! action. Async work happens between a `begin_*` and its `finish_*`.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::domain::{filter_todos, FilterType, NewTodo, Todo, TodoError, TodoId, UserId};
use crate::gateway::GatewayResult;

/// How long an error notice stays up unless dismissed
pub const ERROR_DISMISS_DELAY: Duration = Duration::from_secs(3);

/// A raised error and its sequence number.
///
/// The sequence lets an expiry timer clear only the notice it was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorNotice {
    pub seq: u64,
    pub error: TodoError,
}

impl ErrorNotice {
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Root view state
#[cfg_attr(feature = "store", derive(reactive_stores::Store))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoState {
    /// Authoritative list, as confirmed by the server
    pub todos: Vec<Todo>,
    /// Active filter
    pub filter: FilterType,
    /// Text of the new-todo input
    pub new_title: String,
    /// Initial list request in flight
    pub loading: bool,
    /// Create request in flight
    pub submitting: bool,
    /// Ids with a delete request in flight
    pub deleting_ids: BTreeSet<TodoId>,
    /// Unconfirmed todo shown while creating
    pub temp_todo: Option<Todo>,
    /// Currently displayed error
    pub error: Option<ErrorNotice>,
    /// Sequence of the last raised notice
    pub error_seq: u64,
}

impl TodoState {
    pub fn new(filter: FilterType) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    // ========================
    // Derived views
    // ========================

    /// Filter projection of the authoritative list
    pub fn visible_todos(&self) -> Vec<Todo> {
        filter_todos(&self.todos, self.filter)
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Non-empty list with every todo completed
    pub fn all_completed(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|t| t.completed)
    }

    pub fn completed_ids(&self) -> Vec<TodoId> {
        self.todos.iter().filter(|t| t.completed).map(|t| t.id).collect()
    }

    pub fn is_deleting(&self, id: TodoId) -> bool {
        self.deleting_ids.contains(&id)
    }

    /// Whether the input should take focus
    pub fn is_idle(&self) -> bool {
        !self.loading && !self.submitting
    }

    // ========================
    // Errors
    // ========================

    /// Show `error`, replacing any current notice; returns its sequence number
    pub fn raise(&mut self, error: TodoError) -> u64 {
        self.error_seq += 1;
        self.error = Some(ErrorNotice {
            seq: self.error_seq,
            error,
        });
        log::debug!("raised notice #{}: {}", self.error_seq, error);
        self.error_seq
    }

    /// Explicit dismissal
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Clear the notice if it is still the one numbered `seq`
    pub fn expire_error(&mut self, seq: u64) -> bool {
        match self.error {
            Some(notice) if notice.seq == seq => {
                self.error = None;
                true
            }
            _ => false,
        }
    }

    // ========================
    // Filter & input
    // ========================

    pub fn set_filter(&mut self, filter: FilterType) {
        self.filter = filter;
    }

    pub fn set_new_title(&mut self, title: impl Into<String>) {
        self.new_title = title.into();
    }

    // ========================
    // Load
    // ========================

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, result: GatewayResult<Vec<Todo>>) {
        match result {
            Ok(todos) => self.todos = todos,
            Err(_) => {
                self.raise(TodoError::Load);
            }
        }
        self.loading = false;
    }

    // ========================
    // Create
    // ========================

    /// Validate the input and show the placeholder.
    ///
    /// Returns the payload to send, or `None` when nothing should be sent:
    /// a blank title (raises [`TodoError::EmptyTitle`]) or a create already in flight.
    pub fn begin_submit(&mut self, user_id: UserId, placeholder_id: TodoId) -> Option<NewTodo> {
        if self.submitting {
            return None;
        }
        let title = self.new_title.trim();
        if title.is_empty() {
            self.raise(TodoError::EmptyTitle);
            return None;
        }
        let draft = NewTodo::new(title, user_id);
        self.temp_todo = Some(Todo::placeholder(placeholder_id, &draft));
        self.submitting = true;
        Some(draft)
    }

    pub fn finish_submit(&mut self, result: GatewayResult<Todo>) {
        match result {
            Ok(todo) => {
                self.todos.push(todo);
                self.new_title.clear();
            }
            Err(_) => {
                self.raise(TodoError::Create);
            }
        }
        self.submitting = false;
        self.temp_todo = None;
    }

    // ========================
    // Delete
    // ========================

    /// Mark `id` as deleting; `false` if it is unknown or already deleting
    pub fn begin_delete(&mut self, id: TodoId) -> bool {
        if !self.todos.iter().any(|t| t.id == id) {
            return false;
        }
        self.deleting_ids.insert(id)
    }

    pub fn finish_delete(&mut self, id: TodoId, result: GatewayResult<()>) {
        match result {
            Ok(()) => self.todos.retain(|t| t.id != id),
            Err(_) => {
                self.raise(TodoError::Delete);
            }
        }
        self.deleting_ids.remove(&id);
    }
}
