//! Todo Item Component
//!
//! A single todo row with its loader overlay.

use leptos::prelude::*;
use todos_core::{Todo, TodoStateStoreFields};

use crate::context::use_app_context;

/// One todo row.
///
/// `pending` marks the placeholder of an unconfirmed creation: it cannot be
/// deleted and keeps its overlay up.
#[component]
pub fn TodoItem(todo: Todo, #[prop(optional)] pending: bool) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let id = todo.id;
    let completed = todo.completed;

    let is_busy = move || pending || store.deleting_ids().with(|ids| ids.contains(&id));
    let loader_class = move || {
        if is_busy() {
            "modal overlay is-active"
        } else {
            "modal overlay"
        }
    };

    let on_delete = move |_| {
        if !pending {
            ctx.spawn(move |ctl| async move { ctl.delete(id).await });
        }
    };

    view! {
        <div data-cy="Todo" class={if completed { "todo completed" } else { "todo" }}>
            <label class="todo__status-label">
                // Status is display-only: no toggle handler exists yet
                <input
                    data-cy="TodoStatus"
                    type="checkbox"
                    class="todo__status"
                    prop:checked=completed
                    disabled=pending
                />
            </label>

            <span data-cy="TodoTitle" class="todo__title">
                {todo.title}
            </span>

            <button type="button" class="todo__remove" data-cy="TodoDelete" on:click=on_delete>
                "×"
            </button>

            <div data-cy="TodoLoader" class=loader_class>
                <div class="modal-background has-background-white-ter" />
                <div class="loader" />
            </div>
        </div>
    }
}
