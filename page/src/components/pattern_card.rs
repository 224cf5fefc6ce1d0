//! Pattern card - the filterable unit of the page
//!
//! Every card carries the `data-*` attributes the browser widget filters on.
//! The code snippet is emitted as text, so the markup holds it escaped while
//! the DOM `textContent` equals the original source.

use crate::types::{Pattern, dom};
use leptos::prelude::*;

/// A single pattern: title, description, links, code with copy trigger.
#[component]
pub fn PatternCard(pattern: Pattern) -> impl IntoView {
    let Pattern {
        name,
        description,
        category,
        source,
        keywords,
        docs,
        source_file,
        code,
    } = pattern;
    let source_tag = (!source.is_empty()).then(|| source.clone());
    let data_name = name.clone();

    view! {
        <div
            class=dom::ENTRY_CLASS
            data-category=category.slug()
            data-source=source
            data-name=data_name
            data-keywords=keywords
        >
            <h3>{name}</h3>
            {source_tag.map(|tag| view! { <span class="source-tag">{tag}</span> })}
            <p class=dom::DESCRIPTION_CLASS>{description}</p>
            {docs.map(|link| view! {
                <div class="docs">
                    "Rails Docs: "
                    <a href=link.url target="_blank" rel="noopener">{link.label}</a>
                </div>
            })}
            {source_file.map(|link| view! {
                <div class="file">
                    "source: "
                    <a href=link.url target="_blank" rel="noopener">{link.label}</a>
                </div>
            })}
            {code.map(|code| view! {
                <pre>
                    <code>{code}</code>
                    <button class=dom::COPY_BUTTON_CLASS type="button" title="Copy to clipboard">"Copy"</button>
                </pre>
            })}
        </div>
    }
}
