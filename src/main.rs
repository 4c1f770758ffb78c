//! Portfolio Frontend Entry Point

mod models;
mod config;
mod catalog;
mod preferences;
mod theme;
mod navigation;
mod typing;
mod modal;
mod contact;
mod notices;
mod commands;
mod context;
mod components;
mod app;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = SiteConfig::load();
    if let Err(err) = console_logger::init(console_logger::parse_level(&config.log_level)) {
        // Another backend owns `log`; report through it.
        log::warn!("console logger not installed: {}", err);
    }
    if let Some(err) = config_error {
        log::warn!("{}, using defaults", err);
    }

    mount_to_body(move || view! { <App config=config /> });
}
