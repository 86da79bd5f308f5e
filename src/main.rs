//! Todo Sync Frontend Entry Point

mod api;
mod app;
mod cache;
mod components;
mod config;
mod context;
mod logger;
mod models;
mod sync;
mod toast;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
