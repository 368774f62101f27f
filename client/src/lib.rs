//! # signup-client
//!
//! Leptos + WASM frontend for the account signup page.
//!
//! The page collects account fields, checks nickname availability when the
//! nickname input loses focus, and posts a registration request to the users
//! backend. Network, notification and navigation side effects sit behind the
//! capability traits in [`net::api`] and [`util`] so the form flow in
//! [`pages::signup_flow`] runs without a browser.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
