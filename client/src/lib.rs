//! # client
//!
//! Leptos + WASM frontend for the moveable card board.
//!
//! This crate contains the page shell, components, application state and the
//! color-source network client. It integrates with the `canvas` crate for
//! imperative canvas rendering via the `CanvasHost` bridge component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger already set: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
