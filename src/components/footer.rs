//! Footer Component
//!
//! Remaining count, filter links and the clear-completed button.

use leptos::prelude::*;
use todos_core::{FilterType, TodoStateStoreFields};

use crate::context::use_app_context;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let items_left = move || format!("{} items left", store.with(|s| s.active_count()));
    let nothing_completed = move || store.with(|s| s.completed_count() == 0);

    view! {
        <footer class="todoapp__footer" data-cy="Footer">
            <span class="todo-count" data-cy="TodosCounter">
                {items_left}
            </span>

            <nav class="filter" data-cy="Filter">
                {FilterType::ALL.into_iter().map(|filter| {
                    let link_class = move || {
                        if store.filter().get() == filter {
                            "filter__link selected"
                        } else {
                            "filter__link"
                        }
                    };
                    view! {
                        <a
                            href=filter.href()
                            class=link_class
                            data-cy=format!("FilterLink{}", filter.label())
                            on:click=move |_| ctx.run(|ctl| ctl.select_filter(filter))
                        >
                            {filter.label()}
                        </a>
                    }
                }).collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                data-cy="ClearCompletedButton"
                prop:disabled=nothing_completed
                on:click=move |_| ctx.spawn(|ctl| async move { ctl.clear_completed().await })
            >
                "Clear completed"
            </button>
        </footer>
    }
}
