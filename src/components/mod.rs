//! UI Components
//!
//! Leptos components of the todo app.

mod error_notification;
mod footer;
mod header;
mod todo_item;
mod todo_list;
mod user_warning;

pub use error_notification::ErrorNotification;
pub use footer::Footer;
pub use header::Header;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use user_warning::UserWarning;
