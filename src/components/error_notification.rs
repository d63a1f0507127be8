//! Error Notification Component
//!
//! Always mounted; hidden with a class so it can fade out.

use leptos::prelude::*;
use todos_core::TodoStateStoreFields;

use crate::context::use_app_context;

const NOTIFICATION_CLASS: &str = "notification is-danger is-light has-text-weight-normal";

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let class = move || {
        if store.error().with(Option::is_none) {
            format!("{} hidden", NOTIFICATION_CLASS)
        } else {
            NOTIFICATION_CLASS.to_string()
        }
    };

    view! {
        <div data-cy="ErrorNotification" class=class>
            <button
                data-cy="HideErrorButton"
                type="button"
                class="delete"
                on:click=move |_| ctx.run(|ctl| ctl.dismiss_error())
            />
            {move || store.error().get().map(|notice| notice.message())}
        </div>
    }
}
