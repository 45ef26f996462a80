//! CLI definitions for htmlpack.

use std::path::PathBuf;

use clap::Parser;

use crate::config::EmbedConfig;

/// Inline scripts, stylesheets and images into self-contained HTML files.
#[derive(Debug, Parser)]
#[command(name = "htmlpack")]
#[command(version)]
pub struct Cli {
    /// Input directory to scan for .html files
    #[arg(short, long, default_value = "src/")]
    pub source: PathBuf,

    /// Output directory, created if absent
    #[arg(short, long, default_value = "dist/")]
    pub output: PathBuf,

    /// Inline <img> tags as base64 data URIs
    #[arg(short, long)]
    pub images: bool,

    /// Fetch and inline remote resources (not yet supported)
    #[arg(short, long)]
    pub external: bool,

    /// Collapse whitespace while parsing
    #[arg(short, long)]
    pub minify: bool,

    /// Shorthand for --images --external --minify
    #[arg(short, long)]
    pub all: bool,

    /// Emit progress and diagnostic lines
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the flag surface into a run configuration
    #[must_use]
    pub fn into_config(self) -> EmbedConfig {
        EmbedConfig {
            source_dir: self.source,
            output_dir: self.output,
            embed_images: self.images || self.all,
            embed_external: self.external || self.all,
            minify: self.minify || self.all,
            verbose: self.verbose,
        }
    }
}
