//! # propro-client
//!
//! Leptos + WASM frontend for the PRO&PRO landing site.
//!
//! This crate contains the page, its components, the carousel and theme
//! state models, static content, and the browser glue (storage, media
//! queries, timers). It is rendered on the server with `ssr` and hydrated in
//! the browser with `hydrate`.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
