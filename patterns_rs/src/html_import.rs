//! Recover pattern guides from previously generated HTML pages.
//!
//! Works on both the legacy guide markup and pages rendered by
//! `pattern-page`: sections are `<h2 id="..">` headings, patterns are
//! `<div class="pattern">` blocks holding an `<h3>` title, a `<p>`
//! description, optional `div.docs` / `div.file` links and a
//! `<pre><code>` snippet.

use once_cell::sync::Lazy;
use pattern_page::types::{Category, Link, Pattern, PatternSection};
use regex::Regex;
use tracing::debug;

use crate::keywords::extract_keywords;
use crate::markdown::{self, Frontmatter, GuideSection};

static H2_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<h2[^>]*\bid="([^"]+)"[^>]*>(.*?)</h2>"#).expect("h2 regex")
});
static PATTERN_START_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<div\b[^>]*\bclass="pattern(?: [^"]*)?""#).expect("pattern regex"));
static H3_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<h3[^>]*>(.*?)</h3>").expect("h3 regex"));
static P_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<p\b[^>]*>(.*?)</p>").expect("p regex"));
static DOCS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<div\b[^>]*\bclass="docs"[^>]*>.*?<a [^>]*href="([^"]+)"[^>]*>(.*?)</a>"#)
        .expect("docs regex")
});
static FILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<div\b[^>]*\bclass="file"[^>]*>.*?<a [^>]*href="([^"]+)"[^>]*>(.*?)</a>"#)
        .expect("file regex")
});
static CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<pre[^>]*>\s*<code[^>]*>(.*?)</code>").expect("code regex")
});
static TITLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<title[^>]*>(.*?)</title>").expect("title regex"));
static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->|<!>|<[^>]+>").expect("tag regex"));
static MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->|<!>").expect("marker regex"));
static COUNT_SUFFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(\d+ patterns?\)\s*$").expect("count regex"));

/// Extract every section and its patterns, in document order.
///
/// Blocks without an `<h3>` title are skipped.
pub fn extract_sections(html: &str) -> Vec<GuideSection> {
    let headings: Vec<_> = H2_REGEX.captures_iter(html).collect();
    let mut sections = Vec::with_capacity(headings.len());

    for (i, caps) in headings.iter().enumerate() {
        let (Some(whole), Some(id), Some(raw_name)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        let end = headings
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(html.len(), |m| m.start());
        let content = &html[whole.end()..end];
        let content = content
            .find("</section>")
            .map_or(content, |cut| &content[..cut]);

        let name = COUNT_SUFFIX_REGEX
            .replace(&text_of(raw_name.as_str()), "")
            .into_owned();
        let category = Category::from_section(&name);
        let patterns: Vec<Pattern> = pattern_blocks(content)
            .filter_map(|block| {
                let pattern = parse_block(block, category);
                if pattern.is_none() {
                    debug!("skipping pattern block without title in section {}", name);
                }
                pattern
            })
            .collect();

        sections.push(GuideSection {
            anchor: id.as_str().to_string(),
            section: PatternSection {
                name,
                category,
                patterns,
            },
        });
    }
    sections
}

/// Title of the HTML document, from `<title>`.
pub fn document_title(html: &str) -> Option<String> {
    let caps = TITLE_REGEX.captures(html)?;
    let title = text_of(caps.get(1)?.as_str());
    (!title.is_empty()).then_some(title)
}

/// Convert an HTML guide into Markdown that [`markdown::parse_guide`] reads.
pub fn html_to_markdown(
    html: &str,
    frontmatter: &Frontmatter,
    intro: &str,
) -> Result<(String, Vec<GuideSection>), serde_yaml::Error> {
    let sections = extract_sections(html);
    let markdown = markdown::write_guide(frontmatter, intro, &sections)?;
    Ok((markdown, sections))
}

fn pattern_blocks(content: &str) -> impl Iterator<Item = &str> {
    let starts: Vec<usize> = PATTERN_START_REGEX
        .find_iter(content)
        .map(|m| m.start())
        .collect();
    let ends: Vec<usize> = starts
        .iter()
        .skip(1)
        .copied()
        .chain(std::iter::once(content.len()))
        .collect();
    starts
        .into_iter()
        .zip(ends)
        .map(move |(start, end)| &content[start..end])
}

fn parse_block(block: &str, category: Category) -> Option<Pattern> {
    let name = capture_text(&H3_REGEX, block).filter(|n| !n.is_empty())?;
    let description = capture_text(&P_REGEX, block).unwrap_or_default();
    let code = CODE_REGEX
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| {
            decode_entities(&MARKER_REGEX.replace_all(m.as_str(), ""))
                .trim()
                .to_string()
        });

    Some(Pattern {
        keywords: extract_keywords(&name, &description),
        name,
        description,
        category,
        docs: capture_link(&DOCS_REGEX, block),
        source_file: capture_link(&FILE_REGEX, block),
        code,
        ..Default::default()
    })
}

fn capture_text(regex: &Regex, block: &str) -> Option<String> {
    let caps = regex.captures(block)?;
    Some(text_of(caps.get(1)?.as_str()))
}

fn capture_link(regex: &Regex, block: &str) -> Option<Link> {
    let caps = regex.captures(block)?;
    Some(Link {
        url: decode_entities(caps.get(1)?.as_str()),
        label: text_of(caps.get(2)?.as_str()),
    })
}

/// Markup-free, entity-decoded, trimmed text of an HTML fragment.
fn text_of(fragment: &str) -> String {
    decode_entities(&TAG_REGEX.replace_all(fragment, ""))
        .trim()
        .to_string()
}

/// Decode the named entities HTML escaping produces plus numeric
/// references. Unknown entities are left untouched.
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| entity_char(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn entity_char(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = if let Some(hex) = name
                .strip_prefix("#x")
                .or_else(|| name.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                name.strip_prefix('#')?.parse().ok()?
            };
            char::from_u32(code)
        }
    }
}
