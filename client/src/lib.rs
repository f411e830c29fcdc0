//! # client
//!
//! Leptos + WASM front end for the Pokémon assistant.
//!
//! Renders the chat panel over the framework-neutral `pokechat` store and
//! talks to the assistant endpoint with `gloo-net`. Build with the `csr`
//! feature for the browser; without it the crate compiles natively so the
//! pure pieces can be unit tested.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install browser logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
