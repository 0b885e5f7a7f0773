//! Browser entry point for the wave portal client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app is client-side rendered only: trunk compiles this binary to WASM
//! and mounts it onto the document body. There is no backend of our own;
//! every remote interaction goes through the wallet-injected EIP-1193
//! provider and the portal contract behind it.

mod app;
mod components;
mod eth;
mod pages;
mod state;
mod util;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("logger init failed: {e}");
    }
    leptos::mount::mount_to_body(App);
}
