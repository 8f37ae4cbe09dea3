//! # conference-client
//!
//! Leptos + WASM front-end for the conference website: static marketing
//! pages plus a conference section that lists speakers and sessions from a
//! GraphQL API and can mark a speaker featured.
//!
//! This crate contains pages, components, the shared speaker store, and the
//! GraphQL data layer. The GraphQL server itself is external; the client
//! talks to a single endpoint configured once at startup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install panic/log forwarding and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
