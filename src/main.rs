#![allow(warnings)]
//! Ingredient Tracker Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod debounce;
mod error;
mod hooks;
mod models;
mod outcome;
mod request;
mod session;
mod store;


use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(e) = rolling_logger::init(log::LevelFilter::Debug, config.log_capacity) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
    }
    log::info!("[APP] Using ingredient store at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
