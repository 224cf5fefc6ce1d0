//! # pattern-page
//!
//! Leptos SSR renderer for the static Rails patterns page.
//!
//! The page is a single self-contained HTML document: every pattern is a
//! card carrying `data-category`, `data-source`, `data-name` and
//! `data-keywords` attributes, followed by a search box, two single-select
//! filter groups and a results counter. Interactivity (filtering, copy to
//! clipboard, keyboard shortcuts) is added by the `pattern-browser` WASM
//! module, which locates everything through [`types::dom`].
//!
//! ## Quick Start
//!
//! ```rust
//! use pattern_page::{render_page, BrowserAssets, types::{PageMeta, PatternPage}};
//!
//! let page = PatternPage {
//!     meta: PageMeta {
//!         title: "Ruby & Rails Patterns".into(),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! let html = render_page(&page, &BrowserAssets::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Data structures for page content and the DOM contract
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::PatternDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::PatternPage;

/// Render the complete patterns page.
///
/// Returns a full HTML document, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use pattern_page::{render_page, BrowserAssets, types::*};
///
/// let page = PatternPage {
///     sections: vec![PatternSection {
///         name: "Controllers".into(),
///         category: Category::Controllers,
///         patterns: vec![Pattern {
///             name: "Scoped Concerns".into(),
///             category: Category::Controllers,
///             ..Default::default()
///         }],
///     }],
///     ..Default::default()
/// };
///
/// let html = render_page(&page, &BrowserAssets::default());
/// assert!(html.contains(r#"data-category="controllers""#));
/// assert!(html.contains("1 patterns"));
/// ```
pub fn render_page(page: &PatternPage, assets: &BrowserAssets) -> String {
    let doc = view! {
        <PatternDocument page=page.clone() assets=assets.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Location of the browser widget bundle.
///
/// With no module path the page is still fully readable, just static: all
/// cards are visible and copy buttons do nothing.
///
/// # Example
///
/// ```rust
/// use pattern_page::BrowserAssets;
///
/// // Glue produced by `wasm-pack build --target web`, served next to the page
/// let assets = BrowserAssets {
///     module_path: Some("./pkg/pattern_browser.js".into()),
/// };
/// # let _ = assets;
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct BrowserAssets {
    /// URL of the ES module glue for the `pattern-browser` WASM crate
    pub module_path: Option<String>,
}
