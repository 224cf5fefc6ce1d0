//! Copy a card's code snippet to the system clipboard.
//!
//! The async Clipboard API is tried first. When it is missing (insecure
//! context, old browser) or rejects the write, the legacy path is used: an
//! off-screen `<textarea>` is filled, selected, `execCommand("copy")` is
//! issued and the textarea is removed again.
//!
//! A successful copy swaps the trigger's label for `"Copied!"` and adds the
//! `copied` class for two seconds. Repeated clicks restart the window;
//! superseded timers still fire but leave the label alone.

use std::cell::Cell;
use std::future::Future;

use pattern_page::types::dom;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlDocument, HtmlElement, HtmlTextAreaElement, Window};

use crate::console;

/// Label shown on the trigger after a successful copy.
pub const COPIED_LABEL: &str = "Copied!";

/// How long the confirmation stays up.
pub const CONFIRM_MS: i32 = 2000;

/// Original trigger label while a confirmation is showing.
const ORIGINAL_LABEL_ATTR: &str = "data-original-label";
/// Bumped on every confirmation; only the latest restore timer acts.
const GENERATION_ATTR: &str = "data-copy-generation";

thread_local! {
    static PENDING_RESTORES: Cell<usize> = const { Cell::new(0) };
}

/// Why a copy did not happen.
#[derive(Debug, Error)]
pub enum CopyError {
    /// The trigger is not inside a `<pre>` with a `<code>` child
    #[error("copy trigger is not attached to a code block")]
    NoCodeBlock,
    /// Neither copy mechanism worked
    #[error("clipboard write failed ({primary}); fallback failed ({fallback})")]
    Exhausted {
        /// Why the async Clipboard API did not work
        primary: String,
        /// Why the legacy copy command did not work
        fallback: String,
    },
}

/// Which mechanism put the text on the clipboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyPath {
    /// `navigator.clipboard.writeText`
    ClipboardApi,
    /// Off-screen textarea plus `execCommand("copy")`
    LegacyCommand,
}

/// Something that can put text on the clipboard.
pub trait ClipboardWriter {
    /// Write `text`, reporting which path succeeded.
    fn write_text(&self, text: &str) -> impl Future<Output = Result<CopyPath, CopyError>>;
}

/// The browser clipboard, with the legacy fallback.
#[derive(Clone, Debug)]
pub struct SystemClipboard {
    window: Window,
}

impl SystemClipboard {
    /// Clipboard of `window`.
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    async fn write_async(&self, text: &str) -> Result<(), String> {
        let navigator = self.window.navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|err| console::describe(&err))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err("navigator.clipboard is unavailable".to_string());
        }
        let clipboard: web_sys::Clipboard = clipboard.unchecked_into();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| console::describe(&err))
    }

    fn write_legacy(&self, text: &str) -> Result<(), String> {
        let document = self
            .window
            .document()
            .ok_or_else(|| "window has no document".to_string())?;
        legacy_copy(&document, text)
    }
}

impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<CopyPath, CopyError> {
        let primary = match self.write_async(text).await {
            Ok(()) => return Ok(CopyPath::ClipboardApi),
            Err(reason) => reason,
        };
        console::debug(&format!("clipboard API failed ({primary}), trying execCommand"));
        self.write_legacy(text)
            .map(|()| CopyPath::LegacyCommand)
            .map_err(|fallback| CopyError::Exhausted { primary, fallback })
    }
}

/// Synthesize-select-execute copy. The textarea is always removed.
fn legacy_copy(document: &Document, text: &str) -> Result<(), String> {
    let body = document
        .body()
        .ok_or_else(|| "document has no body".to_string())?;
    let area: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|err| console::describe(&err))?
        .unchecked_into();
    area.set_value(text);
    let _ = area.set_attribute("readonly", "");
    let _ = area.set_attribute("aria-hidden", "true");
    let style = area.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("top", "0");
    let _ = style.set_property("left", "-9999px");
    let _ = style.set_property("opacity", "0");

    body.append_child(&area)
        .map_err(|err| console::describe(&err))?;
    area.select();
    let outcome = match document.dyn_ref::<HtmlDocument>() {
        Some(html) => html
            .exec_command("copy")
            .map_err(|err| console::describe(&err)),
        None => Err("document does not support execCommand".to_string()),
    };
    area.remove();

    match outcome {
        Ok(true) => Ok(()),
        Ok(false) => Err("copy command was refused".to_string()),
        Err(reason) => Err(reason),
    }
}

/// Exact text of the code block a trigger belongs to.
///
/// Uses `textContent`, so entities are decoded and highlighting markup is
/// dropped.
pub fn code_text_for(trigger: &Element) -> Option<String> {
    let pre = trigger.closest("pre").ok().flatten()?;
    let code = pre.query_selector("code").ok().flatten()?;
    code.text_content()
}

/// Copy the snippet next to `trigger` and confirm on success.
pub async fn copy_from_trigger<C: ClipboardWriter>(
    clipboard: &C,
    window: &Window,
    trigger: &HtmlElement,
) -> Result<CopyPath, CopyError> {
    let text = code_text_for(trigger).ok_or(CopyError::NoCodeBlock)?;
    let path = clipboard.write_text(&text).await?;
    show_confirmation(window, trigger);
    Ok(path)
}

/// Swap in the "Copied!" label for [`CONFIRM_MS`], restarting the window if
/// a confirmation is already showing.
///
/// Earlier restore timers are not cancelled. Each one still fires once and
/// frees its closure, but only the one matching the trigger's current
/// generation restores the label.
pub fn show_confirmation(window: &Window, trigger: &HtmlElement) {
    let generation = generation_of(trigger).map_or(1, |g| g.wrapping_add(1));
    let _ = trigger.set_attribute(GENERATION_ATTR, &generation.to_string());
    if !trigger.has_attribute(ORIGINAL_LABEL_ATTR) {
        let original = trigger.text_content().unwrap_or_default();
        let _ = trigger.set_attribute(ORIGINAL_LABEL_ATTR, &original);
    }

    trigger.set_text_content(Some(COPIED_LABEL));
    let _ = trigger.class_list().add_1(dom::COPIED_CLASS);

    let target = trigger.clone();
    let restore = Closure::once_into_js(move || {
        PENDING_RESTORES.with(|pending| pending.set(pending.get().saturating_sub(1)));
        if generation_of(&target) == Some(generation) {
            restore_label(&target);
        }
    });
    match window
        .set_timeout_with_callback_and_timeout_and_arguments_0(restore.unchecked_ref(), CONFIRM_MS)
    {
        Ok(_) => PENDING_RESTORES.with(|pending| pending.set(pending.get() + 1)),
        Err(err) => {
            console::warn(&format!(
                "could not schedule label restore: {}",
                console::describe(&err)
            ));
            restore_label(trigger);
        }
    }
}

/// Restore callbacks scheduled but not yet run.
pub fn pending_restores() -> usize {
    PENDING_RESTORES.with(Cell::get)
}

fn generation_of(trigger: &HtmlElement) -> Option<u32> {
    trigger
        .get_attribute(GENERATION_ATTR)
        .and_then(|g| g.parse().ok())
}

/// Put the original label back and clear the confirmation marker.
pub fn restore_label(trigger: &HtmlElement) {
    if let Some(original) = trigger.get_attribute(ORIGINAL_LABEL_ATTR) {
        trigger.set_text_content(Some(&original));
    }
    let _ = trigger.remove_attribute(ORIGINAL_LABEL_ATTR);
    let _ = trigger.class_list().remove_1(dom::COPIED_CLASS);
}
