//! Section heading plus its cards

use super::PatternCard;
use crate::types::PatternSection;
use leptos::prelude::*;

/// One `##` section of the guide: anchor heading followed by its cards.
#[component]
pub fn PatternSectionView(section: PatternSection) -> impl IntoView {
    let heading = format!("{} ({} patterns)", section.name, section.patterns.len());

    view! {
        <section class="pattern-section" data-section=section.category.slug()>
            <h2 id=section.category.slug()>{heading}</h2>
            {section.patterns.into_iter().map(|pattern| {
                view! { <PatternCard pattern=pattern /> }
            }).collect::<Vec<_>>()}
        </section>
    }
}
