//! Search keywords for pattern cards.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z_][a-z0-9_]*\b").expect("word regex"));

/// Filler words never worth searching for.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "should", "could", "may", "might", "can", "using", "use",
    "uses", "used",
];

/// Keywords for a pattern: identifier-like words of its name and description,
/// lowercased, without stop words or words of two letters or fewer, sorted
/// and space separated.
///
/// ```rust
/// use rails_patterns::keywords::extract_keywords;
///
/// let kw = extract_keywords("Current Attributes", "Use Current for request state");
/// assert_eq!(kw, "attributes current request state");
/// ```
pub fn extract_keywords(name: &str, description: &str) -> String {
    let text = format!("{name} {description}").to_lowercase();
    let words: BTreeSet<&str> = WORD_REGEX
        .find_iter(&text)
        .map(|m| m.as_str())
        .filter(|w| w.len() > 2 && !STOP_WORDS.contains(w))
        .collect();
    words.into_iter().collect::<Vec<_>>().join(" ")
}
