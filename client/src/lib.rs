//! # client
//!
//! Leptos + WASM frontend for the login and signup screens.
//!
//! The pages hold `forms` state machines in signals, send submissions with
//! `gloo-net`, and apply the returned effects against `localStorage`, the
//! shared session context, and the router. Everything browser-specific sits
//! behind the `hydrate` feature so the same components render under SSR.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the reactive runtime to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
