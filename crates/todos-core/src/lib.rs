//! Todos Core
//!
//! Layered architecture:
//! - domain: todo entity, filter projection, user-facing errors
//! - gateway: remote REST access to the todo collection
//! - state: view state and its transition functions
//! - controller: async orchestration of gateway calls against the state

pub mod config;
pub mod controller;
pub mod domain;
pub mod gateway;
pub mod state;

pub use config::{ApiConfig, ConfigError, DEFAULT_BASE_URL};
pub use controller::{Clock, TodoController};
pub use domain::{filter_todos, FilterType, NewTodo, Todo, TodoError, TodoId, UserId};
pub use gateway::{GatewayError, GatewayResult, HttpTodoGateway, TodoGateway};
pub use state::{ErrorNotice, StateCell, TodoState, ERROR_DISMISS_DELAY};

#[cfg(feature = "store")]
pub use state::TodoStateStoreFields;
