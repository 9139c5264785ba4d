//! Verbot Terminal - Leptos Frontend
//!
//! Client-side rendered page for the trading assistant terminal. State and
//! behavior live in `lib-terminal`; this crate binds them to the DOM and to the
//! wallet providers the browser injects.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // Also receives `tracing` events from lib-terminal through its `log` feature.
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Verbot Terminal starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
