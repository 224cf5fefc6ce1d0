//! CSS styles for the patterns page.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use pattern_page::styles::PAGE_CSS;
//!
//! let my_css = ".pattern h3 { color: red; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! assert!(combined.contains(".copy-btn"));
//! ```

/// Content Security Policy for the generated page.
///
/// `'wasm-unsafe-eval'` lets the browser widget instantiate its module;
/// nothing is fetched from other origins.
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval'; connect-src 'self'; font-src 'self' data:;";

/// Complete CSS for the page - dark-first, monospace code, card layout.
pub const PAGE_CSS: &str = r#"
:root {
    --bg: #0d1117;
    --bg-card: #161b22;
    --bg-code: #0a0c10;
    --border: #30363d;
    --text: #c9d1d9;
    --text-dim: #8b949e;
    --accent: #cc0000;
    --accent-soft: rgba(204, 0, 0, 0.15);
    --ok: #3fb950;
    --font-mono: "JetBrains Mono", "SF Mono", Menlo, Consolas, monospace;
    --font-sans: system-ui, -apple-system, "Segoe UI", Helvetica, Arial, sans-serif;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font-sans);
    line-height: 1.55;
}

[hidden] { display: none !important; }

.page-header {
    max-width: 1080px;
    margin: 0 auto;
    padding: 40px 24px 16px;
}

.page-header h1 { margin: 0 0 6px; font-size: 28px; }
.page-header .subtitle { margin: 0; color: var(--text-dim); }

.controls {
    position: sticky;
    top: 0;
    z-index: 10;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
}

.controls-inner {
    max-width: 1080px;
    margin: 0 auto;
    padding: 12px 24px;
    display: flex;
    flex-direction: column;
    gap: 10px;
}

.search-row { display: flex; align-items: center; gap: 12px; }

#pattern-search {
    flex: 1;
    padding: 10px 12px;
    font-size: 15px;
    background: var(--bg-card);
    color: var(--text);
    border: 1px solid var(--border);
    border-radius: 6px;
}

#pattern-search:focus { outline: 2px solid var(--accent); border-color: transparent; }

.search-hint kbd {
    font-family: var(--font-mono);
    font-size: 11px;
    padding: 2px 5px;
    border: 1px solid var(--border);
    border-radius: 4px;
    color: var(--text-dim);
}

#results-count { color: var(--text-dim); font-size: 13px; white-space: nowrap; }

.filter-group { display: flex; flex-wrap: wrap; align-items: center; gap: 6px; }
.filter-label { font-size: 12px; text-transform: uppercase; color: var(--text-dim); margin-right: 4px; }

.filter-group button {
    font-size: 13px;
    padding: 4px 10px;
    background: transparent;
    color: var(--text);
    border: 1px solid var(--border);
    border-radius: 999px;
    cursor: pointer;
}

.filter-group button:hover { border-color: var(--accent); }
.filter-group button.active { background: var(--accent-soft); border-color: var(--accent); color: #fff; }

main { max-width: 1080px; margin: 0 auto; padding: 8px 24px 48px; }

main h2 {
    margin: 32px 0 12px;
    padding-bottom: 6px;
    border-bottom: 1px solid var(--border);
    font-size: 20px;
}

.pattern {
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 16px 18px;
    margin: 12px 0;
}

.pattern h3 { margin: 0 0 6px; font-size: 17px; }
.pattern .pattern-description { margin: 0 0 8px; }
.pattern .source-tag { font-size: 11px; color: var(--text-dim); font-family: var(--font-mono); }
.pattern .docs, .pattern .file { font-size: 13px; color: var(--text-dim); }
.pattern a { color: #58a6ff; text-decoration: none; }
.pattern a:hover { text-decoration: underline; }

.pattern pre {
    position: relative;
    margin: 10px 0 0;
    padding: 12px 14px;
    background: var(--bg-code);
    border: 1px solid var(--border);
    border-radius: 6px;
    overflow-x: auto;
}

.pattern code { font-family: var(--font-mono); font-size: 13px; }

.copy-btn {
    position: absolute;
    top: 8px;
    right: 8px;
    font-size: 12px;
    padding: 3px 8px;
    background: var(--bg-card);
    color: var(--text-dim);
    border: 1px solid var(--border);
    border-radius: 4px;
    cursor: pointer;
}

.copy-btn:hover { color: var(--text); }
.copy-btn.copied { color: var(--ok); border-color: var(--ok); }

.empty-state { color: var(--text-dim); text-align: center; padding: 32px 0; }

.page-footer {
    max-width: 1080px;
    margin: 0 auto;
    padding: 16px 24px 32px;
    color: var(--text-dim);
    font-size: 12px;
    border-top: 1px solid var(--border);
}

@media (prefers-color-scheme: light) {
    :root {
        --bg: #ffffff;
        --bg-card: #f6f8fa;
        --bg-code: #ffffff;
        --border: #d0d7de;
        --text: #1f2328;
        --text-dim: #57606a;
        --accent-soft: rgba(204, 0, 0, 0.08);
    }
    .filter-group button.active { color: var(--text); }
}
"#;
