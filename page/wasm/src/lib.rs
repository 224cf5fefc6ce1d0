//! WASM widget for the patterns page.
//!
//! Adds live filtering, copy-to-clipboard and keyboard shortcuts to the
//! static page rendered by `pattern-page`. All page elements are located
//! through `pattern_page::types::dom`.
//!
//! - [`filter`] - filter state and visibility rules (pure, no DOM)
//! - [`keyboard`] - shortcut resolution (pure, no DOM)
//! - [`clipboard`] - clipboard write with legacy fallback and confirmation
//! - [`PatternBrowser`] - the mounted widget exported to JavaScript
//!
//! ```js
//! import init, { PatternBrowser } from "./pattern_browser.js";
//! await init();
//! const browser = PatternBrowser.mount();
//! // ...
//! browser.destroy();
//! ```

use wasm_bindgen::prelude::*;

pub mod clipboard;
mod console;
pub mod filter;
pub mod keyboard;
mod listener;
mod widget;

pub use widget::PatternBrowser;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Check if WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("pattern-browser v{} ready", env!("CARGO_PKG_VERSION"))
}
