//! # isenior-client
//!
//! Leptos + WASM administrative console for the iSenior care facility.
//!
//! Staff manage residents, appointments, prescriptions and user accounts,
//! and talk to the chat assistant. Every screen is bound to the external
//! REST backend through `net::api`; the only durable client state is the
//! `role` / `username` pair kept by `state::auth`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
