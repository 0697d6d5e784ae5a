//! kbase web client
//!
//! Browser UI for browsing, searching and editing notes served by the
//! kbase notes API.

mod app;
mod bootstrap_config;
mod components;
mod hooks;
mod state;
mod theme;
mod views;

use dioxus::logger::tracing::Level;

fn main() {
    // Initialize logging
    if let Err(error) = dioxus::logger::init(log_level()) {
        eprintln!("Failed to initialize logging: {error}");
    }

    tracing::info!("Starting kbase...");

    dioxus::launch(app::App);
}

const fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}
