//! # sketchpad
//!
//! Leptos + WASM frontend for the shape sketchpad.
//!
//! This crate contains the application shell, toolbar and status chrome, and
//! the `CanvasHost` bridge component that drives the imperative
//! `canvas::engine::Engine`. Browser-only code is gated behind the `csr`
//! feature so the pure helpers stay testable on the host.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then mount.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
