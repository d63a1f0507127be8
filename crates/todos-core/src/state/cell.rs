//! State Cell
//!
//! Seam between the controller and whatever owns the state:
//! a reactive store in the browser, a plain `RefCell` in tests.

use std::cell::RefCell;
use std::rc::Rc;

use super::TodoState;

/// Shared, interior-mutable access to a [`TodoState`].
///
/// Both methods return `None` once the owner has been torn down; callers
/// treat that as "drop the result".
pub trait StateCell: Clone {
    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R>;

    fn update<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R>;
}

impl StateCell for Rc<RefCell<TodoState>> {
    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        self.try_borrow().ok().map(|state| f(&state))
    }

    fn update<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut state| f(&mut state))
    }
}
