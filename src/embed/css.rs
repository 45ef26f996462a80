//! CSS `url(...)` rewriting
//!
//! Scans stylesheet text for `url(...)` references to image files and
//! replaces each with its data-URI form. Matching is purely textual: the
//! pattern keys on the extension allow-list and tolerates optional quotes.
//! No CSS tokenizer is used, so comments and escaped quotes are not
//! specially handled. This is a deliberate compatibility choice.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use super::types::{EmbedError, ResourceKind, SkippedResource};
use super::{encoder, loader};

lazy_static! {
    // The pattern is hardcoded and syntactically valid.
    // Extension matching is case-insensitive; the path itself is not.
    static ref CSS_IMAGE_URL: Regex = Regex::new(
        r#"url\(\s*['"]?([^'"()\s]+\.(?i:jpg|gif|png|jpeg|exif|bmp|tiff|ppm|pgm|pbm|pnm|svg))['"]?\s*\)"#
    )
    .expect("BUG: hardcoded CSS url() pattern is invalid");
}

/// Rewrite image `url(...)` references in `css` to data URIs.
///
/// Paths resolve relative to `base_dir` (the stylesheet's own directory).
/// Remote and already-inlined references are left untouched; references to
/// missing files are warned about, recorded in `skipped`, and kept as-is.
/// Read errors on existing files are fatal and propagate.
pub fn rewrite_urls(
    css: &str,
    base_dir: &Path,
    skipped: &mut Vec<SkippedResource>,
) -> Result<String, EmbedError> {
    let mut out = String::with_capacity(css.len());
    let mut last = 0;

    for caps in CSS_IMAGE_URL.captures_iter(css) {
        let (Some(whole), Some(reference)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&css[last..whole.start()]);
        last = whole.end();

        let value = reference.as_str();
        if loader::is_external(value) || loader::is_data_uri(value) {
            out.push_str(whole.as_str());
            continue;
        }

        let path = loader::resolve(base_dir, value);
        if !path.exists() {
            log::warn!("skipping missing stylesheet image: {}", path.display());
            skipped.push(SkippedResource {
                kind: ResourceKind::Image,
                reference: value.to_string(),
            });
            out.push_str(whole.as_str());
            continue;
        }

        let data_uri = encoder::encode_data_uri(&path)?;
        out.push_str("url(");
        out.push_str(&data_uri);
        out.push(')');
        log::debug!("inlined stylesheet image: {value}");
    }

    out.push_str(&css[last..]);
    Ok(out)
}
