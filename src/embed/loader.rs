//! Local resource loading
//!
//! Resolves relative references against a base directory and reads their
//! content. The existence check happens before the read so that a missing
//! file surfaces as `EmbedError::NotFound` rather than a raw I/O error.
//! Never touches the network: scheme-prefixed references are classified as
//! external and handled by the caller.

use std::path::{Path, PathBuf};

use super::types::EmbedError;

/// Check whether a reference points at a remote resource.
///
/// Mirrors the scheme-marker test of the original tool: anything starting
/// with `http` (covering `http://` and `https://`) is external.
#[must_use]
pub fn is_external(reference: &str) -> bool {
    reference.starts_with("http")
}

/// Check whether a reference is already inlined as a data URI
#[must_use]
pub fn is_data_uri(reference: &str) -> bool {
    reference.starts_with("data:")
}

/// Resolve a relative reference against the base directory
#[must_use]
pub fn resolve(base_dir: &Path, reference: &str) -> PathBuf {
    base_dir.join(reference)
}

/// Load a textual resource (script or stylesheet content)
pub fn load_text(base_dir: &Path, reference: &str) -> Result<String, EmbedError> {
    let path = resolve(base_dir, reference);
    if !path.exists() {
        return Err(EmbedError::NotFound { path });
    }
    std::fs::read_to_string(&path).map_err(|source| EmbedError::Io { path, source })
}

/// Load a binary resource (image bytes)
pub fn load_bytes(path: &Path) -> Result<Vec<u8>, EmbedError> {
    if !path.exists() {
        return Err(EmbedError::NotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read(path).map_err(|source| EmbedError::Io {
        path: path.to_path_buf(),
        source,
    })
}
