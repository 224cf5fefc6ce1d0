//! Guide ingestion and page assembly.
//!
//! Reads every guide, tags its patterns with the guide's source slug, merges
//! sections by name and renders the page through `pattern-page`.

use std::fs;
use std::path::{Path, PathBuf};

use pattern_page::types::{PageMeta, PatternPage, PatternSection, SourceInfo};
use pattern_page::{BrowserAssets, render_page};
use tracing::{debug, info, warn};

use crate::config::PatternsConfig;
use crate::error::{PatternsError, Result};
use crate::markdown::{self, ParsedGuide};

/// A guide to ingest and the project it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideInput {
    pub path: PathBuf,
    pub source: SourceInfo,
}

impl GuideInput {
    /// Input for `path`, taking slug and label from the config when it lists
    /// the file. Otherwise the slug is the guide's directory name (or file
    /// stem) and the label is the slug.
    pub fn resolve(path: &Path, config: &PatternsConfig) -> Self {
        let configured = config.source_for(path);
        let slug = configured
            .and_then(|s| s.slug.clone())
            .unwrap_or_else(|| default_slug(path));
        let label = configured
            .and_then(|s| s.label.clone())
            .unwrap_or_else(|| slug.clone());
        Self {
            path: path.to_path_buf(),
            source: SourceInfo { slug, label },
        }
    }
}

fn default_slug(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .or_else(|| path.file_stem())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "guide".to_string())
}

/// One ingested guide.
#[derive(Debug, Clone)]
pub struct LoadedGuide {
    pub input: GuideInput,
    pub guide: ParsedGuide,
}

impl LoadedGuide {
    /// Frontmatter title, or the source slug.
    pub fn display_title(&self) -> &str {
        self.guide
            .frontmatter
            .title
            .as_deref()
            .unwrap_or(&self.input.source.slug)
    }
}

/// Read and parse one guide.
pub fn load_guide(input: &GuideInput) -> Result<ParsedGuide> {
    let content = fs::read_to_string(&input.path).map_err(|source| PatternsError::Read {
        path: input.path.clone(),
        source,
    })?;
    markdown::parse_guide(&content, &input.source.slug).map_err(|source| {
        PatternsError::Frontmatter {
            path: input.path.clone(),
            source,
        }
    })
}

/// Guides that were loaded, and paths that did not exist.
#[derive(Debug, Default)]
pub struct Ingested {
    pub guides: Vec<LoadedGuide>,
    pub skipped: Vec<PathBuf>,
}

impl Ingested {
    pub fn pattern_count(&self) -> usize {
        self.guides.iter().map(|g| g.guide.pattern_count()).sum()
    }
}

/// Load every input. Missing files are skipped with a warning; having no
/// readable input at all is an error.
pub fn ingest(inputs: &[GuideInput]) -> Result<Ingested> {
    let mut ingested = Ingested::default();
    for input in inputs {
        if !input.path.exists() {
            warn!("skipping {} (not found)", input.path.display());
            ingested.skipped.push(input.path.clone());
            continue;
        }
        let guide = load_guide(input)?;
        info!(
            "parsed {} ({} patterns)",
            input.path.display(),
            guide.pattern_count()
        );
        ingested.guides.push(LoadedGuide {
            input: input.clone(),
            guide,
        });
    }

    if ingested.guides.is_empty() {
        return Err(PatternsError::NoInputs {
            tried: inputs.len(),
        });
    }
    Ok(ingested)
}

/// Concatenate sections with equal names. Sections keep the order in which
/// their name first appears.
pub fn merge_sections<I>(groups: I) -> Vec<PatternSection>
where
    I: IntoIterator<Item = Vec<PatternSection>>,
{
    let mut merged: Vec<PatternSection> = Vec::new();
    for section in groups.into_iter().flatten() {
        match merged.iter_mut().find(|m| m.name == section.name) {
            Some(existing) => existing.patterns.extend(section.patterns),
            None => merged.push(section),
        }
    }
    merged
}

/// Sources in input order, one per slug.
fn page_sources(guides: &[LoadedGuide]) -> Vec<SourceInfo> {
    let mut sources: Vec<SourceInfo> = Vec::new();
    for guide in guides {
        if !sources.iter().any(|s| s.slug == guide.input.source.slug) {
            sources.push(guide.input.source.clone());
        }
    }
    sources
}

/// Assemble the page model from ingested guides.
pub fn assemble_page(ingested: &Ingested, meta: PageMeta) -> PatternPage {
    let sections = merge_sections(ingested.guides.iter().map(|g| g.guide.sections.clone()));
    debug!("merged into {} sections", sections.len());
    PatternPage {
        meta,
        sections,
        sources: page_sources(&ingested.guides),
    }
}

/// Settings for [`build`].
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub title: String,
    pub description: String,
    pub output: PathBuf,
    /// Module path of the browser widget; no script tag when unset
    pub browser_js: Option<String>,
    /// Footer timestamp; the current time when unset
    pub generated_at: Option<String>,
}

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub ingested: Ingested,
    pub total: usize,
    pub output: PathBuf,
    pub bytes: usize,
}

/// Ingest, merge, render and write the page.
pub fn build(inputs: &[GuideInput], options: &BuildOptions) -> Result<BuildReport> {
    let ingested = ingest(inputs)?;
    let meta = PageMeta {
        title: options.title.clone(),
        description: options.description.clone(),
        generated_at: options
            .generated_at
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()),
    };
    let page = assemble_page(&ingested, meta);
    let assets = BrowserAssets {
        module_path: options.browser_js.clone(),
    };
    let html = render_page(&page, &assets);

    write_file(&options.output, &html)?;
    info!("wrote {} ({} bytes)", options.output.display(), html.len());

    Ok(BuildReport {
        total: page.total(),
        ingested,
        output: options.output.clone(),
        bytes: html.len(),
    })
}

/// Write `content`, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let write_err = |source: std::io::Error| PatternsError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, content).map_err(write_err)
}
