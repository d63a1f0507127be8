//! Todos Frontend App
//!
//! Root component: wires config, gateway, store and controller together.

use leptos::prelude::*;
use todos_core::{ApiConfig, HttpTodoGateway, TodoController, TodoStateStoreFields};

use crate::clock::BrowserClock;
use crate::components::{ErrorNotification, Footer, Header, TodoList, UserWarning};
use crate::context::AppContext;
use crate::store::{create_app_store, current_hash, StoreCell};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    let setup = config
        .validate()
        .and_then(|user_id| HttpTodoGateway::new(&config).map(|gateway| (user_id, gateway)));
    let (user_id, gateway) = match setup {
        Ok(setup) => setup,
        Err(e) => {
            log::warn!("todo app not started: {}", e);
            return view! { <UserWarning reason=e.to_string() /> }.into_any();
        }
    };

    let store = create_app_store();
    let controller = TodoController::new(gateway, StoreCell(store), BrowserClock, user_id);
    let ctx = AppContext::new(store, controller);
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| {
        ctx.spawn(|ctl| async move { ctl.load().await });
    });

    // Back/forward and typed hashes move the filter too
    let hash_listener = window_event_listener(leptos::ev::hashchange, move |_| {
        let hash = current_hash();
        ctx.run(|ctl| ctl.follow_hash(&hash));
    });
    on_cleanup(move || hash_listener.remove());

    // Each new notice gets its own expiry timer
    let notice_seq = Memo::new(move |_| store.error().get().map(|notice| notice.seq));
    Effect::new(move |_| {
        if let Some(seq) = notice_seq.get() {
            ctx.spawn(move |ctl| async move { ctl.expire_error(seq).await });
        }
    });

    let has_todos = move || store.todos().with(|todos| !todos.is_empty());

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <Header />
                <TodoList />

                // Footer is hidden while the list is empty
                <Show when=has_todos>
                    <Footer />
                </Show>
            </div>

            <ErrorNotification />
        </div>
    }
    .into_any()
}
