//! Notes Desk Frontend Entry Point

mod models;
mod api;
mod config;
mod view;
mod controllers;
mod context;
mod store;
mod components;
mod app;

#[cfg(test)]
mod testing;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_document();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("console logger not installed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
