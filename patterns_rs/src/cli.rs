//! Command line interface.
//!
//! ```bash
//! rails-patterns build once-campfire/rails-patterns.md fizzy/rails-patterns.md -o docs/index.html
//! rails-patterns import-html guide.html -o once-campfire/rails-patterns.md --title Campfire
//! rails-patterns list --json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pattern_page::types::PatternSection;
use tracing::info;

use crate::build::{self, BuildOptions, GuideInput};
use crate::config::{CONFIG_FILE, PatternsConfig};
use crate::html_import;
use crate::markdown::{Frontmatter, Topics};
use crate::progress;

#[derive(Parser, Debug)]
#[command(name = "rails-patterns")]
#[command(about = "Build a searchable Rails patterns page from Markdown guides")]
#[command(version)]
pub struct Cli {
    /// Config file (default: ./rails-patterns.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render guides into a single HTML page
    Build(BuildArgs),
    /// Convert a generated HTML guide back to Markdown
    ImportHtml(ImportArgs),
    /// Print the patterns found in guides
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Markdown guides (default: sources from the config file)
    pub inputs: Vec<PathBuf>,

    /// Output HTML file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Subtitle under the page title
    #[arg(long)]
    pub description: Option<String>,

    /// Module path of the browser widget glue, as referenced from the page
    #[arg(long)]
    pub browser_js: Option<String>,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Generated HTML guide
    pub input: PathBuf,

    /// Output Markdown file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Guide title (default: the HTML <title>)
    #[arg(long)]
    pub title: Option<String>,

    /// Guide description, also used as the intro paragraph
    #[arg(long)]
    pub description: Option<String>,

    /// Repository the patterns come from
    #[arg(long)]
    pub source_url: Option<String>,

    /// Comma separated topics
    #[arg(long)]
    pub topics: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Markdown guides (default: sources from the config file)
    pub inputs: Vec<PathBuf>,

    /// Print sections as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            PatternsConfig::load_from_path(path)
        }
        None => PatternsConfig::load(Path::new(".")),
    };
    info!(
        "config: {} ({} sources)",
        cli.config
            .as_deref()
            .unwrap_or(Path::new(CONFIG_FILE))
            .display(),
        config.sources.len()
    );

    match cli.command {
        Command::Build(args) => run_build(args, &config),
        Command::ImportHtml(args) => run_import(args),
        Command::List(args) => run_list(args, &config),
    }
}

fn guide_inputs(inputs: &[PathBuf], config: &PatternsConfig) -> Vec<GuideInput> {
    if inputs.is_empty() {
        config
            .sources
            .iter()
            .map(|source| GuideInput::resolve(&config.resolve(&source.path), config))
            .collect()
    } else {
        inputs
            .iter()
            .map(|path| GuideInput::resolve(path, config))
            .collect()
    }
}

fn run_build(args: BuildArgs, config: &PatternsConfig) -> Result<()> {
    let inputs = guide_inputs(&args.inputs, config);
    let options = BuildOptions {
        title: args.title.unwrap_or_else(|| config.page.title.clone()),
        description: args
            .description
            .unwrap_or_else(|| config.page.description.clone()),
        output: args
            .output
            .unwrap_or_else(|| config.resolve(&config.page.output)),
        browser_js: args.browser_js.or_else(|| config.page.browser_js.clone()),
        generated_at: None,
    };

    let report = build::build(&inputs, &options).context("build failed")?;

    for skipped in &report.ingested.skipped {
        progress::warning(&format!("Skipping {} (not found)", skipped.display()));
    }
    for loaded in &report.ingested.guides {
        println!("Processing {}...", loaded.input.path.display());
        progress::step(&format!("Parsed: {}", loaded.display_title()));
        progress::step(&format!(
            "Extracted {} patterns",
            loaded.guide.pattern_count()
        ));
    }
    progress::success(&format!(
        "Merged {} patterns from {} files",
        report.ingested.pattern_count(),
        report.ingested.guides.len()
    ));
    progress::success(&format!("Generated HTML with {} patterns", report.total));
    progress::success(&format!(
        "Output: {} ({} bytes)",
        report.output.display(),
        progress::format_bytes(report.bytes)
    ));
    Ok(())
}

fn run_import(args: ImportArgs) -> Result<()> {
    let html = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let frontmatter = Frontmatter {
        title: args.title.or_else(|| html_import::document_title(&html)),
        description: args.description.clone(),
        topics: args.topics.map(Topics::Line),
        source: args.source_url,
    };
    let intro = args.description.unwrap_or_default();
    let (markdown, sections) = html_import::html_to_markdown(&html, &frontmatter, &intro)
        .context("failed to write frontmatter")?;

    build::write_file(&args.output, &markdown)?;

    println!("Found {} sections", sections.len());
    for entry in &sections {
        println!(
            "  - {}: {} patterns",
            entry.section.name,
            entry.section.patterns.len()
        );
    }
    progress::success(&format!(
        "Wrote {} ({} lines)",
        args.output.display(),
        markdown.lines().count()
    ));
    Ok(())
}

fn run_list(args: ListArgs, config: &PatternsConfig) -> Result<()> {
    let inputs = guide_inputs(&args.inputs, config);
    let ingested = build::ingest(&inputs)?;
    let sections: Vec<PatternSection> =
        build::merge_sections(ingested.guides.into_iter().map(|g| g.guide.sections));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    for section in &sections {
        println!(
            "{} [{}] ({})",
            section.name,
            section.category,
            section.patterns.len()
        );
        for pattern in &section.patterns {
            println!("  - {} ({})", pattern.name, pattern.source);
        }
    }
    Ok(())
}
