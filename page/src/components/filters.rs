//! Search box, filter button groups and the results counter
//!
//! Rendered in their default state: empty search, "All" selected in each
//! group, counter showing the full total. The browser widget takes over
//! from there.

use crate::types::{Category, SourceInfo, dom};
use leptos::prelude::*;

/// One selectable value in a filter group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption {
    /// Value written to `data-value`
    pub value: String,
    /// Button text
    pub label: String,
}

impl FilterOption {
    /// Option for a category, labelled with its pattern count.
    pub fn category(category: Category, count: usize) -> Self {
        Self {
            value: category.slug().to_string(),
            label: format!("{} ({})", category.label(), count),
        }
    }

    /// Option for an originating project.
    pub fn source(source: &SourceInfo) -> Self {
        Self {
            value: source.slug.clone(),
            label: source.label.clone(),
        }
    }
}

/// Sticky control bar: search row plus both filter groups.
#[component]
pub fn FilterBar(
    /// Categories present on the page with their counts
    categories: Vec<(Category, usize)>,
    /// Originating projects
    sources: Vec<SourceInfo>,
    /// Total number of cards (initial counter value)
    total: usize,
) -> impl IntoView {
    let category_options: Vec<FilterOption> = categories
        .into_iter()
        .map(|(category, count)| FilterOption::category(category, count))
        .collect();
    let source_options: Vec<FilterOption> = sources.iter().map(FilterOption::source).collect();

    view! {
        <div class="controls">
            <div class="controls-inner">
                <SearchBox total=total />
                <FilterGroup id=dom::CATEGORY_FILTERS_ID label="Category" options=category_options />
                {(!source_options.is_empty()).then(|| view! {
                    <FilterGroup id=dom::SOURCE_FILTERS_ID label="Source" options=source_options />
                })}
            </div>
        </div>
    }
}

/// Search input with shortcut hint and the results counter.
#[component]
pub fn SearchBox(total: usize) -> impl IntoView {
    view! {
        <div class="search-row">
            <input
                id=dom::SEARCH_INPUT_ID
                type="search"
                placeholder="Search patterns (⌘K / Ctrl+K)"
                autocomplete="off"
                spellcheck="false"
            />
            <span class="search-hint"><kbd>"Esc"</kbd>" clears"</span>
            <span id=dom::RESULTS_COUNT_ID aria-live="polite">{format!("{} patterns", total)}</span>
        </div>
    }
}

/// Single-select button group. "All" comes first and starts active.
#[component]
pub fn FilterGroup(
    id: &'static str,
    label: &'static str,
    options: Vec<FilterOption>,
) -> impl IntoView {
    view! {
        <div class="filter-group" id=id role="group" aria-label=label>
            <span class="filter-label">{label}</span>
            <button class="active" type="button" data-value=dom::ALL>"All"</button>
            {options.into_iter().map(|option| {
                view! {
                    <button type="button" data-value=option.value>{option.label}</button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
