//! Page data types for the patterns collection.
//!
//! These types define the data model rendered into the static page. They're
//! designed to be:
//!
//! - **Serializable** - Easy JSON import/export via serde
//! - **Clone-friendly** - Components can share data without borrowing issues
//! - **Default-able** - Build partial pages with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use pattern_page::types::{Category, Pattern, PatternSection};
//!
//! let section = PatternSection {
//!     name: "Models".into(),
//!     category: Category::Models,
//!     patterns: vec![Pattern {
//!         name: "Current Attributes".into(),
//!         description: "Request-scoped globals via CurrentAttributes".into(),
//!         category: Category::Models,
//!         source: "once-campfire".into(),
//!         ..Default::default()
//!     }],
//! };
//! assert_eq!(section.patterns.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Names shared between the rendered markup and the browser widget.
///
/// The widget in `pattern-browser` locates everything it touches through
/// these constants, so the page and the script cannot drift apart.
pub mod dom {
    /// Filter value meaning "no restriction on this dimension".
    pub const ALL: &str = "all";

    /// Selector matching every pattern card.
    pub const ENTRY_SELECTOR: &str = ".pattern";
    /// Class carried by every pattern card.
    pub const ENTRY_CLASS: &str = "pattern";
    /// Category tag attribute on a card.
    pub const ATTR_CATEGORY: &str = "data-category";
    /// Source (originating project) tag attribute on a card.
    pub const ATTR_SOURCE: &str = "data-source";
    /// Display name attribute on a card.
    pub const ATTR_NAME: &str = "data-name";
    /// Space separated search keywords attribute on a card.
    pub const ATTR_KEYWORDS: &str = "data-keywords";
    /// Selector for the description text node inside a card.
    pub const DESCRIPTION_SELECTOR: &str = ".pattern-description";
    /// Class of the description paragraph.
    pub const DESCRIPTION_CLASS: &str = "pattern-description";

    /// Id of the free-text search input.
    pub const SEARCH_INPUT_ID: &str = "pattern-search";
    /// Id of the category filter button group.
    pub const CATEGORY_FILTERS_ID: &str = "category-filters";
    /// Id of the source filter button group.
    pub const SOURCE_FILTERS_ID: &str = "source-filters";
    /// Attribute holding the filter value of a filter button.
    pub const ATTR_FILTER_VALUE: &str = "data-value";
    /// Selector for filter buttons inside a group.
    pub const FILTER_BUTTON_SELECTOR: &str = "button[data-value]";
    /// Class marking the selected button of a group.
    pub const ACTIVE_CLASS: &str = "active";
    /// Id of the results counter.
    pub const RESULTS_COUNT_ID: &str = "results-count";

    /// Class of the copy-to-clipboard trigger next to each code block.
    pub const COPY_BUTTON_CLASS: &str = "copy-btn";
    /// Selector for copy triggers.
    pub const COPY_BUTTON_SELECTOR: &str = ".copy-btn";
    /// Class applied to a trigger while the "Copied!" confirmation shows.
    pub const COPIED_CLASS: &str = "copied";

    /// Attribute marking the element that scopes one widget instance.
    pub const ROOT_ATTR: &str = "data-pattern-browser";
}

/// Broad area of a Rails application a pattern belongs to.
///
/// Serialized as its slug (`"models"`, `"controllers"`, ...), which is also
/// the value of the card's `data-category` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// ActiveRecord models and concerns
    Models,
    /// Controllers, routing, request handling
    Controllers,
    /// Hotwire, Stimulus, views
    Frontend,
    /// Jobs, deployment, configuration
    Infrastructure,
    /// Anything else
    #[default]
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Models,
        Category::Controllers,
        Category::Frontend,
        Category::Infrastructure,
        Category::Other,
    ];

    /// Map a section heading to its category.
    ///
    /// Matching is a case-insensitive substring test, first hit wins:
    ///
    /// ```rust
    /// use pattern_page::types::Category;
    ///
    /// assert_eq!(Category::from_section("Model Patterns"), Category::Models);
    /// assert_eq!(Category::from_section("Hotwire & Stimulus"), Category::Frontend);
    /// assert_eq!(Category::from_section("Testing"), Category::Other);
    /// ```
    pub fn from_section(section_name: &str) -> Self {
        let lower = section_name.to_lowercase();
        if lower.contains("model") {
            Category::Models
        } else if lower.contains("controller") {
            Category::Controllers
        } else if lower.contains("frontend") || lower.contains("hotwire") {
            Category::Frontend
        } else if lower.contains("infrastructure") {
            Category::Infrastructure
        } else {
            Category::Other
        }
    }

    /// Slug used in ids and `data-category`.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Models => "models",
            Category::Controllers => "controllers",
            Category::Frontend => "frontend",
            Category::Infrastructure => "infrastructure",
            Category::Other => "other",
        }
    }

    /// Human readable label for filter buttons.
    pub fn label(self) -> &'static str {
        match self {
            Category::Models => "Models",
            Category::Controllers => "Controllers",
            Category::Frontend => "Frontend",
            Category::Infrastructure => "Infrastructure",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// A labelled hyperlink (Rails docs page, source file on GitHub).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Link text
    pub label: String,
    /// Target URL
    pub url: String,
}

/// One documented pattern, rendered as a filterable card.
///
/// `code` holds the raw snippet. Escaping happens once, when the card is
/// rendered, so the text copied from the page equals this string exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Display title
    pub name: String,
    /// One-line description
    #[serde(default)]
    pub description: String,
    /// Category derived from the enclosing section
    #[serde(default)]
    pub category: Category,
    /// Slug of the originating project
    #[serde(default)]
    pub source: String,
    /// Space separated search keywords
    #[serde(default)]
    pub keywords: String,
    /// Link to the relevant Rails guide
    #[serde(default)]
    pub docs: Option<Link>,
    /// Link to the file the pattern was extracted from
    #[serde(default)]
    pub source_file: Option<Link>,
    /// Code snippet (unescaped)
    #[serde(default)]
    pub code: Option<String>,
}

/// A titled group of patterns (one `##` heading in the guide).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSection {
    /// Heading text, e.g. "Model Patterns"
    pub name: String,
    /// Category of every pattern in the section
    #[serde(default)]
    pub category: Category,
    /// Patterns in document order
    #[serde(default)]
    pub patterns: Vec<Pattern>,
}

/// An originating project whose patterns appear on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Value used in `data-source`, e.g. "once-campfire"
    pub slug: String,
    /// Button label, e.g. "Campfire"
    pub label: String,
}

/// Page-level metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Page title and main heading
    pub title: String,
    /// Subtitle under the heading
    #[serde(default)]
    pub description: String,
    /// Pre-formatted generation timestamp shown in the footer
    #[serde(default)]
    pub generated_at: String,
}

/// Everything needed to render the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternPage {
    /// Title, description, timestamp
    pub meta: PageMeta,
    /// Sections in display order
    #[serde(default)]
    pub sections: Vec<PatternSection>,
    /// Projects offered in the source filter
    #[serde(default)]
    pub sources: Vec<SourceInfo>,
}

impl PatternPage {
    /// Total number of patterns across all sections.
    pub fn total(&self) -> usize {
        self.sections.iter().map(|s| s.patterns.len()).sum()
    }

    /// Pattern count per category, in [`Category::ALL`] order, skipping
    /// categories with no patterns.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .filter_map(|&category| {
                let count: usize = self
                    .sections
                    .iter()
                    .flat_map(|s| s.patterns.iter())
                    .filter(|p| p.category == category)
                    .count();
                (count > 0).then_some((category, count))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(name: &str, category: Category) -> Pattern {
        Pattern {
            name: name.into(),
            category,
            ..Default::default()
        }
    }

    #[test]
    fn section_names_map_to_categories() {
        assert_eq!(Category::from_section("Model Patterns"), Category::Models);
        assert_eq!(Category::from_section("CONTROLLERS"), Category::Controllers);
        assert_eq!(Category::from_section("Frontend (Hotwire)"), Category::Frontend);
        assert_eq!(Category::from_section("Hotwire"), Category::Frontend);
        assert_eq!(Category::from_section("Infrastructure & Ops"), Category::Infrastructure);
        assert_eq!(Category::from_section("Testing"), Category::Other);
    }

    #[test]
    fn first_matching_keyword_wins() {
        // "model" is checked before "controller"
        assert_eq!(
            Category::from_section("Model-backed controllers"),
            Category::Models
        );
    }

    #[test]
    fn category_serializes_as_slug() {
        let json = serde_json::to_string(&Category::Infrastructure).unwrap();
        assert_eq!(json, "\"infrastructure\"");
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.slug());
        }
    }

    #[test]
    fn pattern_deserializes_with_defaults() {
        let pattern: Pattern =
            serde_json::from_str(r#"{"name": "Broadcasts", "category": "models"}"#).unwrap();
        assert_eq!(pattern.name, "Broadcasts");
        assert_eq!(pattern.category, Category::Models);
        assert!(pattern.code.is_none());
        assert!(pattern.keywords.is_empty());
    }

    #[test]
    fn counts_skip_empty_categories() {
        let page = PatternPage {
            sections: vec![
                PatternSection {
                    name: "Models".into(),
                    category: Category::Models,
                    patterns: vec![
                        pattern("A", Category::Models),
                        pattern("B", Category::Models),
                    ],
                },
                PatternSection {
                    name: "Frontend".into(),
                    category: Category::Frontend,
                    patterns: vec![pattern("C", Category::Frontend)],
                },
            ],
            ..Default::default()
        };

        assert_eq!(page.total(), 3);
        assert_eq!(
            page.category_counts(),
            vec![(Category::Models, 2), (Category::Frontend, 1)]
        );
    }
}
