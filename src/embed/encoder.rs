//! Image encoding
//!
//! Converts a binary image file into a `data:<mime>;base64,<payload>` URI.
//! The MIME type is inferred from the file extension alone; no sniffing.

use std::path::Path;

use base64::Engine;

use super::loader;
use super::types::EmbedError;

/// Infer the MIME type from the file extension, lowercased.
///
/// Covers the same extension allow-list the CSS rewriter matches on.
#[must_use]
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("tiff") => "image/tiff",
        Some("svg") => "image/svg+xml",
        Some("exif") => "image/exif",
        Some("ppm") => "image/x-portable-pixmap",
        Some("pgm") => "image/x-portable-graymap",
        Some("pbm") => "image/x-portable-bitmap",
        Some("pnm") => "image/x-portable-anymap",
        _ => "application/octet-stream",
    }
}

/// Read a file and encode it as a base64 data URI
pub fn encode_data_uri(path: &Path) -> Result<String, EmbedError> {
    let bytes = loader::load_bytes(path)?;
    let mime = mime_for_path(path);

    // Pre-size the output: prefix + payload
    let encoded_capacity = base64::encoded_len(bytes.len(), false).unwrap_or(0);
    let mut uri = String::with_capacity(encoded_capacity + mime.len() + 13);

    uri.push_str("data:");
    uri.push_str(mime);
    uri.push_str(";base64,");

    // STANDARD encoding for best compatibility in attribute values
    base64::engine::general_purpose::STANDARD.encode_string(&bytes, &mut uri);

    Ok(uri)
}
