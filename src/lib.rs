//! # todo-web
//!
//! Leptos + WASM frontend for the todo application's sign-in and sign-up
//! screen.
//!
//! The crate validates credentials as they are typed, posts them to
//! `/auth/signin` or `/auth/signup`, stores the returned token in
//! `localStorage` and reports the outcome through a toast.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
