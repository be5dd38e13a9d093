//! SparkDeck Frontend Entry Point

mod analytics;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod logger;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::load_config();
    logger::init(config.log_filter());
    mount_to_body(move || view! { <App config /> });
}
