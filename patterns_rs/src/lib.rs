//! # rails-patterns
//!
//! Turns Markdown pattern guides into one searchable, filterable HTML page.
//!
//! - [`markdown`] - guide format: frontmatter, sections, patterns
//! - [`keywords`] - search keywords per pattern
//! - [`build`] - ingest, merge and render via `pattern-page`
//! - [`html_import`] - recover guides from generated HTML
//! - [`config`] - optional `rails-patterns.toml`
//!
//! ```rust
//! use rails_patterns::markdown::parse_guide;
//!
//! let guide = parse_guide("## Model Patterns\n\n### Broadcasts\n\nLive updates.\n", "fizzy").unwrap();
//! assert_eq!(guide.sections[0].patterns[0].source, "fizzy");
//! ```

pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod html_import;
pub mod keywords;
pub mod markdown;
pub mod progress;

pub use error::{PatternsError, Result};
