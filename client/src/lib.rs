//! # client
//!
//! Leptos + WASM frontend for the personal homepage: theme toggle, live
//! clock, weather and quote widgets, rotating background, and the static
//! navigation and card grid.
//!
//! The `ssr` feature renders the page inside the `homepage` server; the
//! `hydrate` feature builds the browser bundle that takes over the rendered
//! markup and starts the widget timers.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating homepage");
    leptos::mount::hydrate_body(app::App);
}
