//! Root document component - the complete HTML page

use super::{FilterBar, PatternSectionView};
use crate::BrowserAssets;
use crate::styles::{CSP, PAGE_CSS};
use crate::types::{PatternPage, dom};
use leptos::prelude::*;

/// The complete HTML document for the patterns page
#[component]
pub fn PatternDocument(page: PatternPage, assets: BrowserAssets) -> impl IntoView {
    let total = page.total();
    let categories = page.category_counts();
    let PatternPage {
        meta,
        sections,
        sources,
    } = page;
    let footer = if meta.generated_at.is_empty() {
        format!("{} patterns", total)
    } else {
        format!("Generated {} | {} patterns", meta.generated_at, total)
    };

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{meta.title.clone()}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <div data-pattern-browser="">
                    <header class="page-header">
                        <h1>{meta.title}</h1>
                        {(!meta.description.is_empty()).then(|| view! {
                            <p class="subtitle">{meta.description}</p>
                        })}
                    </header>

                    <FilterBar categories=categories sources=sources total=total />

                    <main>
                        {if total == 0 {
                            view! { <p class="empty-state">"No patterns yet"</p> }.into_any()
                        } else {
                            sections
                                .into_iter()
                                .filter(|section| !section.patterns.is_empty())
                                .map(|section| view! { <PatternSectionView section=section /> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </main>
                </div>

                <footer class="page-footer">{footer}</footer>

                <BrowserScript assets=assets />
            </body>
        </html>
    }
}

/// Module script that loads the browser widget, when configured.
#[component]
fn BrowserScript(assets: BrowserAssets) -> impl IntoView {
    assets.module_path.map(|path| {
        view! { <script type="module">{mount_script(&path)}</script> }
    })
}

/// Bootstrap for the wasm-bindgen glue module produced by `wasm-pack
/// --target web`.
fn mount_script(module_path: &str) -> String {
    format!(
        r#"import init, {{ PatternBrowser }} from "{path}";
await init();
const root = document.querySelector("[{root}]");
window.patternBrowser = root ? PatternBrowser.mount_in(root) : PatternBrowser.mount();"#,
        path = module_path.replace('"', "%22"),
        root = dom::ROOT_ATTR,
    )
}
