//! Basic page generation example.
//!
//! Run with: `cargo run -p pattern-page --example basic_page`

use pattern_page::{
    BrowserAssets, render_page,
    types::{Category, PageMeta, Pattern, PatternPage, PatternSection, SourceInfo},
};

fn main() {
    let page = PatternPage {
        meta: PageMeta {
            title: "Ruby & Rails Patterns".into(),
            description: "A two-card sample page".into(),
            ..Default::default()
        },
        sections: vec![PatternSection {
            name: "Model Patterns".into(),
            category: Category::Models,
            patterns: vec![
                Pattern {
                    name: "Current Attributes".into(),
                    description: "Request-scoped globals".into(),
                    category: Category::Models,
                    source: "sample".into(),
                    keywords: "attributes current globals request scoped".into(),
                    code: Some("class Current < ActiveSupport::CurrentAttributes\nend".into()),
                    ..Default::default()
                },
                Pattern {
                    name: "Touch Chains".into(),
                    description: "Cache invalidation through belongs_to touch".into(),
                    category: Category::Models,
                    source: "sample".into(),
                    keywords: "belongs_to cache chains invalidation touch".into(),
                    ..Default::default()
                },
            ],
        }],
        sources: vec![SourceInfo {
            slug: "sample".into(),
            label: "Sample".into(),
        }],
    };

    // Point at the wasm-pack output to get live filtering
    let assets = BrowserAssets {
        module_path: Some("./pkg/pattern_browser.js".into()),
    };

    let html = render_page(&page, &assets);

    let output_path = "basic_page.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
