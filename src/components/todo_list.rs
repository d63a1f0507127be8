//! Todo List Component

use leptos::prelude::*;
use todos_core::TodoStateStoreFields;

use crate::components::TodoItem;
use crate::context::use_app_context;

/// Visible todos followed by the placeholder of a pending creation
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_context().store;

    let visible_todos = move || store.with(|s| s.visible_todos());

    view! {
        <section class="todoapp__main" data-cy="TodoList">
            <For
                each=visible_todos
                // Re-render a row when any displayed field changes
                key=|todo| (todo.id, todo.completed, todo.title.clone())
                children=move |todo| view! { <TodoItem todo=todo /> }
            />

            {move || store.temp_todo().get().map(|todo| view! { <TodoItem todo=todo pending=true /> })}
        </section>
    }
}
