//! Tag classification and in-place rewriting
//!
//! Walks the parsed document once per resource kind, collects the eligible
//! nodes, then mutates each one in place:
//!
//! - `script[src]` gets its `src` removed and its children replaced with a
//!   text node holding the file content
//! - `link[rel][href]` is replaced by a synthesized `<style>` element that
//!   carries none of the link's attributes
//! - `img[src]` (only when image embedding is enabled) gets its `src`
//!   rewritten to a data URI
//!
//! Nodes are always collected before mutation: detaching a node during
//! select iteration invalidates the iterator.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;

use crate::config::EmbedConfig;

use super::types::{EmbedError, EmbedReport, ResourceKind, SkippedResource};
use super::{css, encoder, loader};

/// Run the embedding passes over a parsed document, mutating it in place.
///
/// Pass order is fixed: scripts, then stylesheets, then (conditionally)
/// images. Within a pass, nodes are visited in document order.
pub fn embed_resources(
    document: &NodeRef,
    base_dir: &Path,
    config: &EmbedConfig,
) -> Result<EmbedReport> {
    let mut report = EmbedReport::default();
    inline_scripts(document, base_dir, config, &mut report)?;
    inline_stylesheets(document, base_dir, config, &mut report)?;
    if config.embed_images {
        inline_images(document, base_dir, config, &mut report)?;
    }
    Ok(report)
}

/// Serialize the mutated tree back into one HTML string
pub fn serialize(document: &NodeRef) -> Result<String> {
    let mut output = Vec::new();
    document
        .serialize(&mut output)
        .context("failed to serialize HTML document")?;
    String::from_utf8(output).context("serialized HTML is not valid UTF-8")
}

/// Collapse whitespace runs in text nodes outside script/style/pre/textarea.
///
/// Applied right after parsing when minification is requested; serialization
/// itself never re-indents.
pub fn collapse_whitespace(document: &NodeRef) {
    for node in document.descendants() {
        let Some(text) = node.as_text() else { continue };
        if in_raw_text_context(&node) {
            continue;
        }
        let mut value = text.borrow_mut();
        if value.chars().any(char::is_whitespace) {
            let collapsed = collapse_runs(&value);
            *value = collapsed;
        }
    }
}

fn in_raw_text_context(node: &NodeRef) -> bool {
    node.ancestors().any(|ancestor| {
        ancestor.as_element().is_some_and(|el| {
            matches!(&*el.name.local, "script" | "style" | "pre" | "textarea")
        })
    })
}

fn collapse_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Classify one path attribute value. `Ok(true)` means "proceed with local
/// embedding"; `Ok(false)` means the node is left untouched.
fn classify_reference(reference: &str, config: &EmbedConfig) -> Result<bool, EmbedError> {
    if reference.is_empty() || loader::is_data_uri(reference) {
        return Ok(false);
    }
    if loader::is_external(reference) {
        if config.embed_external {
            // Recognized flag, unimplemented feature: always fails.
            return Err(EmbedError::NotSupported {
                reference: reference.to_string(),
            });
        }
        return Ok(false);
    }
    Ok(true)
}

fn inline_scripts(
    document: &NodeRef,
    base_dir: &Path,
    config: &EmbedConfig,
    report: &mut EmbedReport,
) -> Result<()> {
    let matches: Vec<_> = document
        .select("script[src]")
        .map_err(|()| anyhow!("invalid script selector"))?
        .collect();

    for node_ref in matches {
        let node = node_ref.as_node();
        let src = {
            let attrs = node_ref.attributes.borrow();
            attrs.get("src").map(std::string::ToString::to_string)
        };
        let Some(src) = src else { continue };
        if !classify_reference(&src, config)? {
            continue;
        }

        let content = match loader::load_text(base_dir, &src) {
            Ok(content) => content,
            Err(EmbedError::NotFound { path }) => {
                log::warn!("skipping missing script: {}", path.display());
                report.skipped.push(SkippedResource {
                    kind: ResourceKind::Script,
                    reference: src,
                });
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        {
            let mut attrs = node_ref.attributes.borrow_mut();
            attrs.remove("src");
        }
        while let Some(child) = node.first_child() {
            child.detach();
        }
        node.append(NodeRef::new_text(content));

        report.embedded += 1;
        log::debug!("inlined script: {src}");
    }
    Ok(())
}

fn inline_stylesheets(
    document: &NodeRef,
    base_dir: &Path,
    config: &EmbedConfig,
    report: &mut EmbedReport,
) -> Result<()> {
    let matches: Vec<_> = document
        .select("link[rel][href]")
        .map_err(|()| anyhow!("invalid link selector"))?
        .collect();

    for node_ref in matches {
        let node = node_ref.as_node();
        let (rel, href) = {
            let attrs = node_ref.attributes.borrow();
            (
                attrs.get("rel").map(std::string::ToString::to_string),
                attrs.get("href").map(std::string::ToString::to_string),
            )
        };
        let (Some(rel), Some(href)) = (rel, href) else {
            continue;
        };
        if rel.is_empty() || !classify_reference(&href, config)? {
            continue;
        }

        let content = match loader::load_text(base_dir, &href) {
            Ok(content) => content,
            Err(EmbedError::NotFound { path }) => {
                log::warn!("skipping missing stylesheet: {}", path.display());
                report.skipped.push(SkippedResource {
                    kind: ResourceKind::Stylesheet,
                    reference: href,
                });
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        // url(...) references resolve against the stylesheet's own directory
        let css_path = loader::resolve(base_dir, &href);
        let css_base = css_path.parent().unwrap_or(base_dir);
        let content = css::rewrite_urls(&content, css_base, &mut report.skipped)?;

        // Synthesize a bare <style> element; the link's attributes are
        // deliberately discarded.
        let fragment = kuchiki::parse_html().one(format!("<style>{content}</style>"));
        let style = fragment
            .select_first("style")
            .map_err(|()| anyhow!("failed to synthesize inline style element"))?;
        let style_node = style.as_node().clone();
        style_node.detach();

        node.insert_before(style_node);
        node.detach();

        report.embedded += 1;
        log::debug!("inlined stylesheet: {href}");
    }
    Ok(())
}

fn inline_images(
    document: &NodeRef,
    base_dir: &Path,
    config: &EmbedConfig,
    report: &mut EmbedReport,
) -> Result<()> {
    // Attribute-only mutation, but collected anyway to keep the two-phase
    // shape consistent across passes.
    let matches: Vec<_> = document
        .select("img[src]")
        .map_err(|()| anyhow!("invalid img selector"))?
        .collect();

    for node_ref in matches {
        let src = {
            let attrs = node_ref.attributes.borrow();
            attrs.get("src").map(std::string::ToString::to_string)
        };
        let Some(src) = src else { continue };
        if !classify_reference(&src, config)? {
            continue;
        }

        let path = loader::resolve(base_dir, &src);
        if !path.exists() {
            log::warn!("skipping missing image: {}", path.display());
            report.skipped.push(SkippedResource {
                kind: ResourceKind::Image,
                reference: src,
            });
            continue;
        }

        let data_uri = encoder::encode_data_uri(&path)?;
        let mut attrs = node_ref.attributes.borrow_mut();
        attrs.insert("src", data_uri);

        report.embedded += 1;
        log::debug!("inlined image: {src}");
    }
    Ok(())
}
