//! Application Context
//!
//! Store, controller and task scope provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use todos_core::{HttpTodoGateway, TodoController};

use crate::clock::BrowserClock;
use crate::store::{AppStore, StoreCell};
use crate::tasks::TaskScope;

/// Controller wired to the browser
pub type AppController = TodoController<HttpTodoGateway, StoreCell, BrowserClock>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// View state, for rendering
    pub store: AppStore,
    controller: StoredValue<AppController, LocalStorage>,
    tasks: StoredValue<TaskScope, LocalStorage>,
}

impl AppContext {
    /// Build the context for the current owner.
    ///
    /// Tasks spawned through it are aborted when the owner is cleaned up.
    pub fn new(store: AppStore, controller: AppController) -> Self {
        let tasks = StoredValue::new_local(TaskScope::new());
        on_cleanup(move || {
            tasks.try_with_value(|tasks| tasks.abort_all());
        });

        Self {
            store,
            controller: StoredValue::new_local(controller),
            tasks,
        }
    }

    /// Run a synchronous controller action
    pub fn run(&self, action: impl FnOnce(&AppController)) {
        self.controller.try_with_value(action);
    }

    /// Run an async controller action as an abortable task
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let (Some(controller), Some(tasks)) =
            (self.controller.try_get_value(), self.tasks.try_get_value())
        else {
            return;
        };
        tasks.spawn(action(controller));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
