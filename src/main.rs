//! Todos Frontend Entry Point

mod app;
mod clock;
mod components;
mod context;
mod store;
mod tasks;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("logger initialized twice");
    mount_to_body(App);
}
