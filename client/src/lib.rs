//! # client
//!
//! Leptos + WASM single-page UI for the fake news detector.
//!
//! Panel state and the render model come from the `panel` crate; this crate
//! only turns the view into HTML, wires DOM events to panel events, and
//! performs the browser-side HTTP call. Build with `--features csr` to mount
//! the app in a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// mounts [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
