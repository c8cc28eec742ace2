//! # webui
//!
//! Leptos + WASM frontend shell for the WASAText chat client.
//!
//! The crate owns the client-side route table: which paths exist, which of
//! them require an auth token, and where unauthenticated navigations are sent.
//! Credentials are read through the `CredentialStore` capability so the
//! decision logic runs the same in the browser and in native tests.

pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod router;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
