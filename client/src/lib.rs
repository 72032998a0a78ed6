//! # client
//!
//! Leptos + WASM frontend for Scorely, the course-section grading app.
//!
//! Pages, components, session state and the typed REST client for the
//! course backend. Built with `ssr` for the Axum host and `hydrate` for the
//! browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
