//! Run configuration
//!
//! `EmbedConfig` holds the resolved options for one run: where to read,
//! where to write, and which optional passes are enabled.

use std::path::PathBuf;

/// Configuration for a directory embedding run
#[derive(Debug, Clone)]
pub struct EmbedConfig {
    /// Input directory scanned (non-recursively) for `.html` files
    pub source_dir: PathBuf,
    /// Output directory; created if absent
    pub output_dir: PathBuf,
    /// Inline `<img>` tags as data URIs
    pub embed_images: bool,
    /// Attempt to fetch remote resources (always fails; unimplemented)
    pub embed_external: bool,
    /// Collapse whitespace in text nodes after parsing
    pub minify: bool,
    /// Emit per-file progress lines
    pub verbose: bool,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src/"),
            output_dir: PathBuf::from("dist/"),
            embed_images: false,
            embed_external: false,
            minify: false,
            verbose: false,
        }
    }
}

impl EmbedConfig {
    #[must_use]
    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_images(mut self, enabled: bool) -> Self {
        self.embed_images = enabled;
        self
    }

    #[must_use]
    pub fn with_external(mut self, enabled: bool) -> Self {
        self.embed_external = enabled;
        self
    }

    #[must_use]
    pub fn with_minify(mut self, enabled: bool) -> Self {
        self.minify = enabled;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }
}
