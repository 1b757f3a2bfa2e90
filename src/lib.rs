//! # honkspotter
//!
//! Leptos + WASM frontend for the HonkSpotter goose-sighting map.
//!
//! Users sign up or log in, report geolocated sightings with optional photos,
//! browse a list and map of sightings, and view/edit profiles. Auth is a
//! short-lived access token held only in memory; it is re-minted through an
//! HTTP-only refresh cookie by the request gateway in [`net::api`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
