//! Filter engine: which pattern cards are visible for the current filters.
//!
//! Pure logic, no DOM. The widget reads each card's attributes into an
//! [`EntryAttrs`] once at mount, then every user interaction goes through
//! [`FilterEngine`], which returns a [`Projection`] the view applies.
//!
//! Visibility of an entry is the AND of three independent tests:
//!
//! - category: selected category is `"all"` or equals the entry's tag
//! - source: selected source is `"all"` or equals the entry's tag
//! - text: search term is empty, or occurs case-insensitively in the
//!   entry's name, description or keywords (any one is enough)

use pattern_page::types::dom::ALL;

/// Attributes of one pattern card, as read from the page.
///
/// Missing attributes are read as empty strings. An empty category or
/// source never matches a concrete selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryAttrs {
    /// `data-category`
    pub category: String,
    /// `data-source`
    pub source: String,
    /// `data-name`
    pub name: String,
    /// `data-keywords`
    pub keywords: String,
    /// Text of the description paragraph
    pub description: String,
}

/// The two button-group dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterDimension {
    /// Category group
    Category,
    /// Source (originating project) group
    Source,
}

/// Current combination of selected category, source and search text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// Selected category tag or `"all"`
    pub category: String,
    /// Selected source tag or `"all"`
    pub source: String,
    /// Raw search text, empty when not searching
    pub search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL.to_string(),
            source: ALL.to_string(),
            search_term: String::new(),
        }
    }
}

impl FilterState {
    /// True when no dimension restricts anything.
    pub fn is_default(&self) -> bool {
        self.category == ALL && self.source == ALL && self.search_term.is_empty()
    }

    /// Category test for one entry.
    pub fn category_matches(&self, entry: &EntryAttrs) -> bool {
        tag_matches(&self.category, &entry.category)
    }

    /// Source test for one entry.
    pub fn source_matches(&self, entry: &EntryAttrs) -> bool {
        tag_matches(&self.source, &entry.source)
    }

    /// Free-text test for one entry.
    pub fn text_matches(&self, entry: &EntryAttrs) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        [&entry.name, &entry.description, &entry.keywords]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Whether the entry is visible under this state.
    pub fn matches(&self, entry: &EntryAttrs) -> bool {
        self.category_matches(entry) && self.source_matches(entry) && self.text_matches(entry)
    }
}

fn tag_matches(selected: &str, tag: &str) -> bool {
    selected == ALL || (!tag.is_empty() && tag == selected)
}

/// Counter text for a filter outcome.
///
/// Unfiltered state shows the bare total; anything else shows
/// `"<visible> of <total> patterns"`.
pub fn counter_label(state: &FilterState, visible: usize, total: usize) -> String {
    if state.is_default() {
        format!("{} patterns", total)
    } else {
        format!("{} of {} patterns", visible, total)
    }
}

/// Everything the view needs to show one filter outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection {
    /// Visibility per entry, in entry order
    pub visible: Vec<bool>,
    /// Number of `true` values in `visible`
    pub visible_count: usize,
    /// Number of entries
    pub total: usize,
    /// Results counter text
    pub label: String,
}

/// Filter state plus the fixed entry list it is evaluated against.
#[derive(Clone, Debug, Default)]
pub struct FilterEngine {
    state: FilterState,
    entries: Vec<EntryAttrs>,
}

impl FilterEngine {
    /// Engine in the default state over `entries`.
    pub fn new(entries: Vec<EntryAttrs>) -> Self {
        Self {
            state: FilterState::default(),
            entries,
        }
    }

    /// Current filter state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Entries in page order.
    pub fn entries(&self) -> &[EntryAttrs] {
        &self.entries
    }

    /// Replace the search text and recompute.
    pub fn set_search_term(&mut self, text: impl Into<String>) -> Projection {
        self.state.search_term = text.into();
        self.recompute()
    }

    /// Select a category (or `"all"`) and recompute.
    pub fn set_category(&mut self, tag: impl Into<String>) -> Projection {
        self.state.category = tag.into();
        self.recompute()
    }

    /// Select a source (or `"all"`) and recompute.
    pub fn set_source(&mut self, tag: impl Into<String>) -> Projection {
        self.state.source = tag.into();
        self.recompute()
    }

    /// Select a value in one of the button-group dimensions.
    pub fn select(&mut self, dimension: FilterDimension, tag: impl Into<String>) -> Projection {
        match dimension {
            FilterDimension::Category => self.set_category(tag),
            FilterDimension::Source => self.set_source(tag),
        }
    }

    /// Evaluate every entry against the current state.
    ///
    /// Takes `&self`: calling it any number of times without a state change
    /// yields the same projection.
    pub fn recompute(&self) -> Projection {
        let visible: Vec<bool> = self.entries.iter().map(|e| self.state.matches(e)).collect();
        let visible_count = visible.iter().filter(|&&v| v).count();
        let total = self.entries.len();
        Projection {
            label: counter_label(&self.state, visible_count, total),
            visible,
            visible_count,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str, source: &str, name: &str) -> EntryAttrs {
        EntryAttrs {
            category: category.into(),
            source: source.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// 85 entries, 16 of them controllers, split across two sources.
    fn collection() -> Vec<EntryAttrs> {
        (0..85)
            .map(|i| {
                let category = match i {
                    0..16 => "controllers",
                    16..50 => "models",
                    50..70 => "frontend",
                    _ => "infrastructure",
                };
                let source = if i % 2 == 0 { "once-campfire" } else { "fizzy" };
                entry(category, source, &format!("Pattern {i}"))
            })
            .collect()
    }

    #[test]
    fn default_state_shows_everything() {
        let engine = FilterEngine::new(collection());
        let projection = engine.recompute();

        assert!(engine.state().is_default());
        assert_eq!(projection.visible_count, 85);
        assert!(projection.visible.iter().all(|&v| v));
        assert_eq!(projection.label, "85 patterns");
    }

    #[test]
    fn category_filter_counts_matches() {
        let mut engine = FilterEngine::new(collection());
        let projection = engine.set_category("controllers");

        assert_eq!(projection.visible_count, 16);
        assert_eq!(projection.label, "16 of 85 patterns");
    }

    #[test]
    fn dimensions_combine_with_and() {
        let mut engine = FilterEngine::new(collection());
        engine.set_category("controllers");
        let projection = engine.set_source("fizzy");

        // odd indices below 16
        assert_eq!(projection.visible_count, 8);
        assert_eq!(projection.label, "8 of 85 patterns");
        for (entry, &visible) in engine.entries().iter().zip(&projection.visible) {
            assert_eq!(
                visible,
                entry.category == "controllers" && entry.source == "fizzy"
            );
        }
    }

    #[test]
    fn visibility_is_conjunction_of_the_three_tests() {
        let entries = vec![
            EntryAttrs {
                category: "models".into(),
                source: "fizzy".into(),
                name: "Touch chains".into(),
                keywords: "cache touch".into(),
                description: "Bust caches upward".into(),
            },
            entry("controllers", "once-campfire", "Scoped concerns"),
            entry("", "", "Untagged"),
        ];
        let states = [
            FilterState::default(),
            FilterState {
                category: "models".into(),
                ..Default::default()
            },
            FilterState {
                source: "once-campfire".into(),
                ..Default::default()
            },
            FilterState {
                search_term: "cache".into(),
                ..Default::default()
            },
            FilterState {
                category: "controllers".into(),
                source: "fizzy".into(),
                search_term: "x".into(),
            },
        ];

        for state in &states {
            for entry in &entries {
                assert_eq!(
                    state.matches(entry),
                    state.category_matches(entry)
                        && state.source_matches(entry)
                        && state.text_matches(entry),
                    "state {state:?} entry {entry:?}"
                );
            }
        }
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut engine = FilterEngine::new(collection());
        engine.set_search_term("pattern 1");
        let first = engine.recompute();
        let second = engine.recompute();

        assert_eq!(first, second);
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut engine = FilterEngine::new(vec![
            entry("models", "fizzy", "Current Attributes"),
            entry("models", "fizzy", "Touch chains"),
        ]);
        let projection = engine.set_search_term("CURRENT");

        assert_eq!(projection.visible, vec![true, false]);
        assert_eq!(projection.label, "1 of 2 patterns");
    }

    #[test]
    fn keywords_alone_are_enough() {
        let mut engine = FilterEngine::new(vec![EntryAttrs {
            category: "infrastructure".into(),
            source: "once-campfire".into(),
            name: "Background jobs".into(),
            keywords: "solid_queue recurring".into(),
            description: "Work off the request path".into(),
        }]);

        assert_eq!(engine.set_search_term("solid_queue").visible, vec![true]);
        assert_eq!(engine.set_search_term("request path").visible, vec![true]);
        assert_eq!(engine.set_search_term("sidekiq").visible, vec![false]);
    }

    #[test]
    fn clearing_search_restores_full_count() {
        let mut engine = FilterEngine::new(collection());
        assert_eq!(engine.set_search_term("Pattern 8").visible_count, 6); // 8, 80-84
        let projection = engine.set_search_term("");

        assert_eq!(projection.visible_count, 85);
        assert_eq!(projection.label, "85 patterns");
    }

    #[test]
    fn filtered_label_even_when_everything_matches() {
        let mut engine = FilterEngine::new(collection());
        let projection = engine.set_search_term("pattern");

        assert_eq!(projection.visible_count, 85);
        assert_eq!(projection.label, "85 of 85 patterns");
    }

    #[test]
    fn selecting_all_again_returns_to_default_label() {
        let mut engine = FilterEngine::new(collection());
        engine.select(FilterDimension::Category, "models");
        let projection = engine.select(FilterDimension::Category, ALL);

        assert!(engine.state().is_default());
        assert_eq!(projection.label, "85 patterns");
    }

    #[test]
    fn empty_tags_never_match_a_selection() {
        let mut engine = FilterEngine::new(vec![entry("", "", "Untagged")]);

        assert_eq!(engine.recompute().visible, vec![true]);
        assert_eq!(engine.set_category("models").visible, vec![false]);
        engine.set_category(ALL);
        assert_eq!(engine.set_source("fizzy").visible, vec![false]);
        engine.set_source(ALL);
        // an empty selected value does not pair up with an empty tag
        assert_eq!(engine.set_category("").visible, vec![false]);
    }

    #[test]
    fn no_entries_is_a_no_op() {
        let mut engine = FilterEngine::new(Vec::new());

        assert_eq!(engine.recompute().label, "0 patterns");
        let projection = engine.set_search_term("anything");
        assert!(projection.visible.is_empty());
        assert_eq!(projection.label, "0 of 0 patterns");
    }

    #[test]
    fn last_write_wins() {
        let mut engine = FilterEngine::new(collection());
        engine.set_category("models");
        engine.set_category("frontend");
        let projection = engine.recompute();

        assert_eq!(engine.state().category, "frontend");
        assert_eq!(projection.visible_count, 20);
    }
}
