pub mod components;
pub mod interop;
pub mod portfolio;

pub use components::*;
pub use interop::*;
pub use portfolio::*;

use wasm_bindgen::prelude::*;

/// Entry point for static HTML pages that only want the theme toggle.
#[wasm_bindgen]
pub fn install_theme_toggle() {
    if let Err(e) = portfolio::theme::install_static_toggle() {
        dioxus_logger::tracing::warn!("Failed to bind theme toggle: {:?}", e);
    }
}
