//! # crimesleuth-client
//!
//! Leptos frontend for the CrimeSleuth AI demo site: marketing pages, a
//! simulated sign-in, an in-memory case dashboard and a per-case workspace
//! with evidence upload and a mocked analysis report.
//!
//! State models under `state` are plain structs with no browser dependency,
//! so their behavior is unit tested natively. Browser glue sits behind the
//! `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
