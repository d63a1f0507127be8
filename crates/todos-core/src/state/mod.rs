//! State Layer
//!
//! View state of the todo app and how it may be read and written.

mod cell;
mod view;

pub use cell::StateCell;
pub use view::{ErrorNotice, TodoState, ERROR_DISMISS_DELAY};

#[cfg(feature = "store")]
pub use view::TodoStateStoreFields;
