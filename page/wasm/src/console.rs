//! Diagnostic output to the browser console.
//!
//! Failures the widget swallows (missing controls, clipboard refusals) are
//! reported here and nowhere else.

use wasm_bindgen::{JsCast, JsValue};

const PREFIX: &str = "[pattern-browser]";

fn line(message: &str) -> JsValue {
    JsValue::from_str(&format!("{PREFIX} {message}"))
}

/// Verbose detail, hidden by default in most consoles.
pub fn debug(message: &str) {
    web_sys::console::debug_1(&line(message));
}

/// Degraded but working.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&line(message));
}

/// An operation failed for good.
pub fn error(message: &str) {
    web_sys::console::error_1(&line(message));
}

/// Best-effort text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
