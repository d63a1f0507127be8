//! User Warning Component
//!
//! Shown instead of the app when no user id was configured.

use leptos::prelude::*;

#[component]
pub fn UserWarning(#[prop(into)] reason: String) -> impl IntoView {
    view! {
        <section class="section user-warning">
            <p class="box is-size-3">
                "Please get your " <b>"userId"</b> " and set "
                <code>"TODO_USER_ID"</code> " when building the app"
            </p>
            <p class="help is-danger">{reason}</p>
        </section>
    }
}
