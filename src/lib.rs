pub mod cli;
pub mod config;
pub mod embed;
pub mod pipeline;

pub use config::EmbedConfig;
pub use embed::{EmbedError, EmbedReport, ResourceKind, SkippedResource};
pub use pipeline::{RunSummary, discover_html_files, run};
