//! Resource embedding
//!
//! This module provides the embedding pass: given a parsed document tree,
//! find embeddable script/stylesheet/image references, load the referenced
//! files from disk, transform them into inline content, and serialize the
//! tree back to HTML text.

pub mod css;
pub mod encoder;
pub mod loader;
pub mod rewriter;
pub mod types;

// Re-exports for public API
pub use rewriter::{collapse_whitespace, embed_resources, serialize};
pub use types::{EmbedError, EmbedReport, ResourceKind, SkippedResource};
