//! # client
//!
//! Leptos + WASM frontend for the family registry: the member list and
//! member detail views.
//!
//! This crate contains pages, shared components, per-view state models,
//! network types, and the authenticated REST client. View rules live in
//! `state` as pure functions so they are testable without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server render.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating family registry client");
    leptos::mount::hydrate_body(app::App);
}
