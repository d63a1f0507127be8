//! Header Component
//!
//! Toggle-all button and the new-todo form.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use todos_core::TodoStateStoreFields;

use crate::context::use_app_context;

/// Header with the new-todo input
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    // Give the input focus back once nothing is in flight
    Effect::new(move |_| {
        if store.with(|s| s.is_idle()) {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.spawn(|ctl| async move { ctl.submit().await });
    };

    // Toggling is not wired yet; the button only reflects the list
    let toggle_all_class = move || {
        if store.with(|s| s.all_completed()) {
            "todoapp__toggle-all active"
        } else {
            "todoapp__toggle-all"
        }
    };

    view! {
        <header class="todoapp__header">
            <button type="button" class=toggle_all_class data-cy="ToggleAllButton" />

            <form on:submit=on_submit>
                <input
                    node_ref=input_ref
                    data-cy="NewTodoField"
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    autofocus=true
                    prop:value=move || store.new_title().get()
                    prop:disabled=move || store.submitting().get()
                    on:input=move |ev| {
                        let title = event_target_value(&ev);
                        ctx.run(|ctl| ctl.set_new_title(title));
                    }
                />
            </form>
        </header>
    }
}
