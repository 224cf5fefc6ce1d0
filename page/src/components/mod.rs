//! Leptos UI components for rendering the patterns page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PatternDocument
//! ├── FilterBar
//! │   ├── SearchBox
//! │   ├── FilterGroup (category)
//! │   └── FilterGroup (source)
//! ├── PatternSectionView (per section)
//! │   └── PatternCard (per pattern)
//! └── BrowserScript
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! used directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use pattern_page::components::PatternCard;
//!
//! view! { <PatternCard pattern=my_pattern /> }
//! ```

mod document;
mod filters;
mod pattern_card;
mod section;

pub use document::PatternDocument;
pub use filters::{FilterBar, FilterGroup, FilterOption, SearchBox};
pub use pattern_card::PatternCard;
pub use section::PatternSectionView;
