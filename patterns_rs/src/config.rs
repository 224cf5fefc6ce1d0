//! Configuration file support.
//!
//! Loads optional `rails-patterns.toml` from the project root.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "rails-patterns.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PatternsConfig {
    pub page: PageConfig,
    /// Guides merged into the page, in order
    pub sources: Vec<SourceConfig>,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// `[page]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub description: String,
    /// Where `build` writes the page
    pub output: PathBuf,
    /// Module path of the browser widget, as referenced from the page.
    /// Example: `"./pkg/pattern_browser.js"`
    pub browser_js: Option<String>,
}

/// One `[[sources]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    pub path: PathBuf,
    /// Defaults to the name of the directory holding the guide
    #[serde(default)]
    pub slug: Option<String>,
    /// Filter button label, defaults to the slug
    #[serde(default)]
    pub label: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Ruby & Rails Patterns Collection".to_string(),
            description: "Production-ready patterns from Basecamp Campfire and 37signals Fizzy"
                .to_string(),
            output: PathBuf::from("docs/index.html"),
            browser_js: None,
        }
    }
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            page: PageConfig::default(),
            sources: vec![
                SourceConfig::at("once-campfire/rails-patterns.md"),
                SourceConfig::at("fizzy/rails-patterns.md"),
            ],
            base_dir: PathBuf::from("."),
        }
    }
}

impl SourceConfig {
    /// Source entry with slug and label left to their defaults.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slug: None,
            label: None,
        }
    }
}

impl PatternsConfig {
    /// Load config from `rails-patterns.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        let base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        if !path.exists() {
            return Self {
                base_dir,
                ..Self::default()
            };
        }

        let parsed = match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<PatternsConfig>(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                Self::default()
            }
        };

        Self { base_dir, ..parsed }
    }

    /// Resolve a configured path against the config file's directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Configured source entry for a guide path, if any.
    pub fn source_for(&self, path: &Path) -> Option<&SourceConfig> {
        self.sources
            .iter()
            .find(|s| self.resolve(&s.path) == path || s.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PatternsConfig::default();
        assert_eq!(config.page.title, "Ruby & Rails Patterns Collection");
        assert_eq!(config.page.output, PathBuf::from("docs/index.html"));
        assert!(config.page.browser_js.is_none());
        assert_eq!(config.sources.len(), 2);
        assert_eq!(
            config.sources[0].path,
            PathBuf::from("once-campfire/rails-patterns.md")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = PatternsConfig::load(temp.path());
        assert_eq!(config.page, PageConfig::default());
        assert_eq!(config.base_dir, temp.path());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
[page]
title = "Team Patterns"
output = "site/index.html"
browser_js = "./pkg/pattern_browser.js"

[[sources]]
path = "guides/campfire.md"
slug = "campfire"
label = "Campfire"

[[sources]]
path = "fizzy/rails-patterns.md"
"#
        )
        .expect("write config");

        let config = PatternsConfig::load(temp.path());
        assert_eq!(config.page.title, "Team Patterns");
        // unset keys keep their defaults
        assert_eq!(config.page.description, PageConfig::default().description);
        assert_eq!(config.page.output, PathBuf::from("site/index.html"));
        assert_eq!(
            config.page.browser_js.as_deref(),
            Some("./pkg/pattern_browser.js")
        );
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[0].slug.as_deref(), Some("campfire"));
        assert_eq!(config.sources[1].label, None);
    }

    #[test]
    fn test_load_invalid_config_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "[page\ntitle = ").expect("write config");

        let config = PatternsConfig::load_from_path(&config_path);
        assert_eq!(config.page, PageConfig::default());
        assert_eq!(config.sources.len(), 2);
    }

    #[test]
    fn test_resolve_relative_to_config_dir() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "[[sources]]\npath = \"a/guide.md\"\n").expect("write");

        let config = PatternsConfig::load_from_path(&config_path);
        let resolved = config.resolve(Path::new("a/guide.md"));
        assert_eq!(resolved, temp.path().join("a/guide.md"));
        assert!(config.source_for(&resolved).is_some());
        assert!(config.source_for(Path::new("other.md")).is_none());
    }
}
