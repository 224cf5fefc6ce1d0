//! Error types for pattern ingestion and page building.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while reading guides or writing output.
#[derive(Debug, Error)]
pub enum PatternsError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid frontmatter in {}: {source}", path.display())]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize frontmatter: {0}")]
    FrontmatterOut(#[source] serde_yaml::Error),

    #[error("no readable pattern files ({tried} tried)")]
    NoInputs { tried: usize },
}

pub type Result<T> = std::result::Result<T, PatternsError>;
