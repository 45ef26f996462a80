//! Type definitions for resource embedding

use std::path::PathBuf;

/// Resource kind for eligibility rules and log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Script,
    Stylesheet,
    Image,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Script => write!(f, "script"),
            ResourceKind::Stylesheet => write!(f, "stylesheet"),
            ResourceKind::Image => write!(f, "image"),
        }
    }
}

/// Errors raised while loading or transforming a referenced resource
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    /// The resolved path does not exist on disk (checked before reading)
    #[error("resource not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Remote fetching was requested but is not implemented
    #[error("fetching remote resources is not supported: {reference}")]
    NotSupported { reference: String },

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A reference that was left un-embedded because its file is missing
#[derive(Debug, Clone)]
pub struct SkippedResource {
    pub kind: ResourceKind,
    pub reference: String,
}

/// Result of the embedding pass over one document, with skip tracking
#[derive(Debug, Clone, Default)]
pub struct EmbedReport {
    pub embedded: usize,
    pub skipped: Vec<SkippedResource>,
}

impl EmbedReport {
    /// Total number of references considered
    #[must_use]
    pub fn total(&self) -> usize {
        self.embedded + self.skipped.len()
    }

    /// Check if any references were skipped
    #[must_use]
    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}
