//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use todos_core::{FilterType, StateCell, TodoState};

/// Type alias for the store
pub type AppStore = Store<TodoState>;

/// Create the store, picking the initial filter from the location hash
pub fn create_app_store() -> AppStore {
    Store::new(TodoState::new(FilterType::from_hash(&current_hash())))
}

/// The page's location hash, empty when unavailable
pub fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

/// Lets the controller drive the store.
///
/// Reads are untracked; every write notifies subscribers. Both return
/// `None` once the owning component has been disposed.
#[derive(Clone, Copy)]
pub struct StoreCell(pub AppStore);

impl StateCell for StoreCell {
    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
