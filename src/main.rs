//! Todo List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod logger;
mod models;
mod pages;
mod session;
mod store;
mod timer;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    log::info!("[APP] starting");
    mount_to_body(App);
}
