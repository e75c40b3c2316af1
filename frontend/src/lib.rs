pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod i18n;
pub mod logger;
pub mod pages;
pub mod storage;
pub mod utils;

use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::Config;
use crate::logger::ConsoleLogger;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_env();
    if let Err(e) = ConsoleLogger::init(config.log_level) {
        web_sys::console::warn_1(&format!("Console logger not installed: {}", e).into());
    }
    log::info!("Starting with timezone {}", config.timezone);

    mount_to_body(move || view! { <App config=config /> });
}
