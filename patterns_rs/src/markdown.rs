//! Markdown pattern guides: reading and writing.
//!
//! A guide is a YAML frontmatter block followed by `##` sections holding
//! `###` patterns:
//!
//! ````markdown
//! ---
//! title: Basecamp Rails Patterns - Campfire
//! source: https://github.com/basecamp/once-campfire
//! ---
//!
//! ## Model Patterns
//!
//! ### Current Attributes
//!
//! Request-scoped globals via CurrentAttributes.
//!
//! **Rails Docs:** [CurrentAttributes](https://api.rubyonrails.org/classes/ActiveSupport/CurrentAttributes.html)
//!
//! **Source:** [app/models/current.rb](https://github.com/basecamp/once-campfire/blob/main/app/models/current.rb)
//!
//! ```ruby
//! class Current < ActiveSupport::CurrentAttributes
//!   attribute :user
//! end
//! ```
//! ````

use once_cell::sync::Lazy;
use pattern_page::types::{Category, Link, Pattern, PatternSection};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::keywords::extract_keywords;

static FRONTMATTER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|\z)").expect("frontmatter regex")
});

static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link regex"));

const DOCS_PREFIX: &str = "**Rails Docs:**";
const SOURCE_PREFIX: &str = "**Source:**";
const FENCE: &str = "```";
const TOC_HEADING: &str = "table of contents";

/// Guide metadata from the YAML frontmatter. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Topics>,
    /// Repository the patterns were extracted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// `topics:` as either a YAML list or a comma separated line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Topics {
    List(Vec<String>),
    Line(String),
}

impl Topics {
    pub fn items(&self) -> Vec<String> {
        match self {
            Topics::List(items) => items.clone(),
            Topics::Line(line) => line
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// A parsed guide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedGuide {
    pub frontmatter: Frontmatter,
    pub sections: Vec<PatternSection>,
}

impl ParsedGuide {
    pub fn pattern_count(&self) -> usize {
        self.sections.iter().map(|s| s.patterns.len()).sum()
    }
}

/// Split off and parse the frontmatter. Content without a frontmatter block
/// yields the default metadata and the whole input as body.
pub fn split_frontmatter(content: &str) -> Result<(Frontmatter, &str), serde_yaml::Error> {
    let Some(caps) = FRONTMATTER_REGEX.captures(content) else {
        return Ok((Frontmatter::default(), content));
    };
    let body_start = caps.get(0).map_or(0, |m| m.end());
    let yaml = caps.get(1).map_or("", |m| m.as_str());
    let frontmatter = if yaml.trim().is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(yaml)?
    };
    Ok((frontmatter, &content[body_start..]))
}

/// Parse a whole guide. Every pattern is tagged with `source`.
pub fn parse_guide(content: &str, source: &str) -> Result<ParsedGuide, serde_yaml::Error> {
    let (frontmatter, body) = split_frontmatter(content)?;
    Ok(ParsedGuide {
        frontmatter,
        sections: parse_sections(body, source),
    })
}

/// Parse the guide body into sections.
///
/// A section heading seen twice keeps collecting into the first section of
/// that name. Lines outside a pattern are ignored.
pub fn parse_sections(body: &str, source: &str) -> Vec<PatternSection> {
    let mut sections: Vec<PatternSection> = Vec::new();
    let mut section: Option<usize> = None;
    let mut in_pattern = false;
    let mut lines = body.lines();

    while let Some(line) = lines.next() {
        if let Some(heading) = line.strip_prefix("## ") {
            let name = heading.trim();
            in_pattern = false;
            section = if name.eq_ignore_ascii_case(TOC_HEADING) {
                None
            } else {
                Some(section_index(&mut sections, name))
            };
            continue;
        }

        if let Some(heading) = line.strip_prefix("### ") {
            if let Some(idx) = section {
                let current = &mut sections[idx];
                current.patterns.push(Pattern {
                    name: heading.trim().to_string(),
                    category: current.category,
                    source: source.to_string(),
                    ..Default::default()
                });
                in_pattern = true;
                continue;
            }
        }

        if line.trim().is_empty() || !in_pattern {
            continue;
        }
        let Some(idx) = section else {
            continue;
        };
        let Some(pattern) = sections[idx].patterns.last_mut() else {
            continue;
        };

        if line.starts_with(DOCS_PREFIX) {
            if let Some(link) = parse_link(line) {
                pattern.docs = Some(link);
            }
        } else if line.starts_with(SOURCE_PREFIX) {
            if let Some(link) = parse_link(line) {
                pattern.source_file = Some(link);
            }
        } else if line.starts_with(FENCE) {
            let block = lines
                .by_ref()
                .take_while(|l| !l.starts_with(FENCE))
                .collect::<Vec<_>>()
                .join("\n");
            pattern.code = Some(match pattern.code.take() {
                Some(previous) => format!("{previous}\n\n{block}"),
                None => block,
            });
        } else if pattern.description.is_empty() && !line.starts_with("**") {
            pattern.description = line.trim().to_string();
        }
    }

    for pattern in sections.iter_mut().flat_map(|s| s.patterns.iter_mut()) {
        pattern.keywords = extract_keywords(&pattern.name, &pattern.description);
    }
    sections
}

fn section_index(sections: &mut Vec<PatternSection>, name: &str) -> usize {
    if let Some(idx) = sections.iter().position(|s| s.name == name) {
        return idx;
    }
    sections.push(PatternSection {
        name: name.to_string(),
        category: Category::from_section(name),
        patterns: Vec::new(),
    });
    sections.len() - 1
}

fn parse_link(line: &str) -> Option<Link> {
    let caps = LINK_REGEX.captures(line)?;
    Some(Link {
        label: caps.get(1)?.as_str().to_string(),
        url: caps.get(2)?.as_str().to_string(),
    })
}

/// A section together with its anchor id, for the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideSection {
    pub anchor: String,
    pub section: PatternSection,
}

/// Write a guide in the format [`parse_guide`] reads.
pub fn write_guide(
    frontmatter: &Frontmatter,
    intro: &str,
    sections: &[GuideSection],
) -> Result<String, serde_yaml::Error> {
    let mut lines: Vec<String> = Vec::new();

    lines.push("---".into());
    lines.push(serde_yaml::to_string(frontmatter)?.trim_end().to_string());
    lines.push("---".into());
    lines.push(String::new());

    if let Some(title) = &frontmatter.title {
        lines.push(format!("# {title}"));
        lines.push(String::new());
    }
    if !intro.trim().is_empty() {
        lines.push(intro.trim().to_string());
        lines.push(String::new());
    }

    let total: usize = sections.iter().map(|s| s.section.patterns.len()).sum();
    lines.push("## Table of Contents".into());
    lines.push(String::new());
    for entry in sections {
        lines.push(format!(
            "- [{}](#{}) ({} patterns)",
            entry.section.name,
            entry.anchor,
            entry.section.patterns.len()
        ));
    }
    lines.push(String::new());
    lines.push(format!("**Total: {total} patterns**"));
    lines.push(String::new());

    for entry in sections {
        lines.push(format!("## {}", entry.section.name));
        lines.push(String::new());
        for pattern in &entry.section.patterns {
            write_pattern(&mut lines, pattern);
        }
    }

    Ok(lines.join("\n"))
}

fn write_pattern(lines: &mut Vec<String>, pattern: &Pattern) {
    lines.push(format!("### {}", pattern.name));
    lines.push(String::new());
    if !pattern.description.is_empty() {
        lines.push(pattern.description.clone());
        lines.push(String::new());
    }
    if let Some(docs) = &pattern.docs {
        lines.push(format!("{DOCS_PREFIX} [{}]({})", docs.label, docs.url));
        lines.push(String::new());
    }
    if let Some(file) = &pattern.source_file {
        lines.push(format!("{SOURCE_PREFIX} [{}]({})", file.label, file.url));
        lines.push(String::new());
    }
    if let Some(code) = &pattern.code {
        lines.push(format!("{FENCE}ruby"));
        lines.push(code.clone());
        lines.push(FENCE.into());
        lines.push(String::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GUIDE: &str = r#"---
title: Basecamp Rails Patterns - Campfire
description: Patterns from Campfire
topics: rails, ruby, hotwire
source: https://github.com/basecamp/once-campfire
---

# Basecamp Rails Patterns - Campfire

Intro paragraph that belongs to no pattern.

## Table of Contents

- [Model Patterns](#models) (2 patterns)

## Model Patterns

### Current Attributes

Request-scoped globals via CurrentAttributes.

A second paragraph is not the description.

**Rails Docs:** [CurrentAttributes](https://api.rubyonrails.org/current)

**Source:** [app/models/current.rb](https://github.com/basecamp/once-campfire/current.rb)

```ruby
class Current < ActiveSupport::CurrentAttributes
  attribute :user

  ## not a heading
end
```

### Bare Pattern

## Hotwire & Stimulus

### Typing Indicator

Broadcast <typing> state & presence.
"#;

    #[test]
    fn parses_frontmatter() {
        let guide = parse_guide(GUIDE, "once-campfire").unwrap();
        let fm = &guide.frontmatter;
        assert_eq!(fm.title.as_deref(), Some("Basecamp Rails Patterns - Campfire"));
        assert_eq!(
            fm.source.as_deref(),
            Some("https://github.com/basecamp/once-campfire")
        );
        assert_eq!(
            fm.topics.as_ref().map(Topics::items),
            Some(vec!["rails".to_string(), "ruby".into(), "hotwire".into()])
        );
    }

    #[test]
    fn parses_sections_and_patterns() {
        let guide = parse_guide(GUIDE, "once-campfire").unwrap();
        let names: Vec<_> = guide.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Model Patterns", "Hotwire & Stimulus"]);
        assert_eq!(guide.sections[0].category, Category::Models);
        assert_eq!(guide.sections[1].category, Category::Frontend);
        assert_eq!(guide.pattern_count(), 3);

        let current = &guide.sections[0].patterns[0];
        assert_eq!(current.name, "Current Attributes");
        assert_eq!(current.description, "Request-scoped globals via CurrentAttributes.");
        assert_eq!(current.category, Category::Models);
        assert_eq!(current.source, "once-campfire");
        assert_eq!(
            current.docs,
            Some(Link {
                label: "CurrentAttributes".into(),
                url: "https://api.rubyonrails.org/current".into(),
            })
        );
        assert_eq!(
            current.source_file.as_ref().map(|l| l.label.as_str()),
            Some("app/models/current.rb")
        );
        assert_eq!(
            current.code.as_deref(),
            Some(
                "class Current < ActiveSupport::CurrentAttributes\n  attribute :user\n\n  ## not a heading\nend"
            )
        );
        assert_eq!(current.keywords, "attributes current currentattributes globals request scoped via");
    }

    #[test]
    fn optional_parts_stay_empty() {
        let guide = parse_guide(GUIDE, "once-campfire").unwrap();
        let bare = &guide.sections[0].patterns[1];
        assert_eq!(bare.name, "Bare Pattern");
        assert!(bare.description.is_empty());
        assert!(bare.docs.is_none());
        assert!(bare.source_file.is_none());
        assert!(bare.code.is_none());
        assert_eq!(bare.keywords, "bare pattern");
    }

    #[test]
    fn text_is_kept_raw() {
        let guide = parse_guide(GUIDE, "s").unwrap();
        let typing = &guide.sections[1].patterns[0];
        assert_eq!(typing.description, "Broadcast <typing> state & presence.");
    }

    #[test]
    fn missing_frontmatter_gives_defaults() {
        let guide = parse_guide("## Controllers\n\n### Scoped Finds\n\nFind through the user.\n", "x")
            .unwrap();
        assert_eq!(guide.frontmatter, Frontmatter::default());
        assert_eq!(guide.sections[0].category, Category::Controllers);
        assert_eq!(guide.sections[0].patterns[0].description, "Find through the user.");
    }

    #[test]
    fn malformed_frontmatter_is_an_error() {
        let err = parse_guide("---\ntitle: [unclosed\n---\n## A\n", "x");
        assert!(err.is_err());
    }

    #[test]
    fn empty_frontmatter_is_allowed() {
        let guide = parse_guide("---\n\n---\n## Other\n### P\n", "x").unwrap();
        assert_eq!(guide.frontmatter, Frontmatter::default());
        assert_eq!(guide.pattern_count(), 1);
    }

    #[test]
    fn topics_accept_a_list() {
        let (fm, _) = split_frontmatter("---\ntopics:\n  - turbo\n  - stimulus\n---\n").unwrap();
        assert_eq!(
            fm.topics.map(|t| t.items()),
            Some(vec!["turbo".to_string(), "stimulus".into()])
        );
    }

    #[test]
    fn repeated_section_heading_appends() {
        let body = "## Models\n### A\n## Jobs\n### B\n## Models\n### C\n";
        let sections = parse_sections(body, "x");
        assert_eq!(sections.len(), 2);
        let names: Vec<_> = sections[0].patterns.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn patterns_outside_sections_are_ignored() {
        let sections = parse_sections("### Orphan\n\nText\n\n## Models\n### Kept\n", "x");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].patterns.len(), 1);
        assert_eq!(sections[0].patterns[0].name, "Kept");
        assert!(sections[0].patterns[0].description.is_empty());
    }

    #[test]
    fn later_code_blocks_are_appended() {
        let body = "## Models\n### P\n```ruby\none\n```\n\n```erb\ntwo\n```\n";
        let sections = parse_sections(body, "x");
        assert_eq!(sections[0].patterns[0].code.as_deref(), Some("one\n\ntwo"));
    }

    #[test]
    fn unclosed_fence_runs_to_end() {
        let sections = parse_sections("## Models\n### P\n```ruby\nputs 1\nputs 2", "x");
        assert_eq!(sections[0].patterns[0].code.as_deref(), Some("puts 1\nputs 2"));
    }

    #[test]
    fn written_guide_reads_back() {
        let guide = parse_guide(GUIDE, "once-campfire").unwrap();
        let sections: Vec<GuideSection> = guide
            .sections
            .iter()
            .map(|s| GuideSection {
                anchor: s.category.slug().to_string(),
                section: s.clone(),
            })
            .collect();

        let written = write_guide(&guide.frontmatter, "Intro.", &sections).unwrap();
        assert!(written.starts_with("---\n"));
        assert!(written.contains("\n# Basecamp Rails Patterns - Campfire\n\nIntro.\n"));
        assert!(written.contains("- [Model Patterns](#models) (2 patterns)"));
        assert!(written.contains("**Total: 3 patterns**"));
        assert!(written.contains("```ruby\nclass Current"));

        let reread = parse_guide(&written, "once-campfire").unwrap();
        assert_eq!(reread, guide);
    }
}
