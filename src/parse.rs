//! Tree-sitter parsing of authored markdown into content blocks.
//!
//! Each section's embedded source is parsed once at startup. The block
//! grammar groups content under `section` nodes keyed by headings, so the
//! walk treats those as transparent containers and classifies everything
//! else it finds at the top level: headings, paragraphs, fenced code,
//! block quotes (callouts), lists, and thematic breaks.

use crate::formats::Format;
use crate::section::{Block, TipKind};
use std::io;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Query, QueryCursor};

/// One heading in a section's source, used for catalogue listings.
pub struct OutlineEntry {
    /// Heading depth (1 = `#`, 2 = `##`, ...).
    pub level: usize,
    /// Heading text without markup symbols.
    pub title: String,
}

/// Parse a markdown source into renderable blocks.
///
/// # Errors
///
/// Returns an error if the grammar cannot be loaded or the source fails
/// to produce a parse tree.
pub fn parse_blocks(source: &str, format: &dyn Format) -> io::Result<Vec<Block>> {
    let tree = parse_tree(source, format)?;
    let mut blocks = Vec::new();
    collect_blocks(tree.root_node(), source, &mut blocks);
    Ok(blocks)
}

/// Extract the heading outline of a markdown source.
///
/// Runs the format's heading query over the parse tree and returns the
/// headings in document order.
///
/// # Errors
///
/// Returns an error if the grammar, query, or parse fails.
pub fn outline(source: &str, format: &dyn Format) -> io::Result<Vec<OutlineEntry>> {
    let tree = parse_tree(source, format)?;
    let query = Query::new(&format.language(), format.heading_query())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());

    let mut entries = Vec::new();
    while let Some(matched) = matches.next() {
        for capture in matched.captures {
            let (level, title) = heading_parts(capture.node, source);
            entries.push(OutlineEntry { level, title });
        }
    }
    Ok(entries)
}

fn parse_tree(source: &str, format: &dyn Format) -> io::Result<tree_sitter::Tree> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&format.language())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    parser.parse(source, None).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidData, "no parse tree for source")
    })
}

fn collect_blocks(node: Node<'_>, source: &str, out: &mut Vec<Block>) {
    let mut walk = node.walk();
    for child in node.named_children(&mut walk) {
        match child.kind() {
            // Headings open implicit section containers; recurse through them.
            "section" => collect_blocks(child, source, out),
            "atx_heading" => {
                let (level, text) = heading_parts(child, source);
                out.push(Block::Heading { level, text });
            }
            "paragraph" => out.push(Block::Paragraph {
                text: inline_text(child, source),
            }),
            "fenced_code_block" => out.push(code_block(child, source)),
            "indented_code_block" => out.push(Block::Code {
                lang: String::new(),
                source: node_text(child, source).trim_end_matches('\n').to_string(),
            }),
            "block_quote" => out.push(tip_block(child, source)),
            "list" => out.push(list_block(child, source)),
            "thematic_break" => out.push(Block::Rule),
            _ => {}
        }
    }
}

fn heading_parts(node: Node<'_>, source: &str) -> (usize, String) {
    let mut level = 1;
    let mut text = String::new();
    let mut walk = node.walk();
    for child in node.named_children(&mut walk) {
        let kind = child.kind();
        if let Some(depth) = heading_level(kind) {
            level = depth;
        } else if kind == "inline" {
            text = node_text(child, source).trim().to_string();
        }
    }
    (level, text)
}

/// Marker node kinds look like `atx_h2_marker`.
fn heading_level(kind: &str) -> Option<usize> {
    let digits = kind.strip_prefix("atx_h")?.strip_suffix("_marker")?;
    digits.parse().ok()
}

fn code_block(node: Node<'_>, source: &str) -> Block {
    let mut lang = String::new();
    let mut code = String::new();
    let mut walk = node.walk();
    for child in node.named_children(&mut walk) {
        match child.kind() {
            "info_string" => lang = node_text(child, source).trim().to_string(),
            "code_fence_content" => {
                code = node_text(child, source).trim_end_matches('\n').to_string();
            }
            _ => {}
        }
    }
    Block::Code { lang, source: code }
}

fn tip_block(node: Node<'_>, source: &str) -> Block {
    let mut parts = Vec::new();
    collect_quote_text(node, source, &mut parts);
    let text = normalize_ws(&parts.join(" "));
    let kind = classify_tip(&text);
    Block::Tip { kind, text }
}

fn collect_quote_text(node: Node<'_>, source: &str, out: &mut Vec<String>) {
    let mut walk = node.walk();
    for child in node.named_children(&mut walk) {
        match child.kind() {
            "paragraph" => out.push(inline_text(child, source)),
            "block_quote" => collect_quote_text(child, source, out),
            _ => {}
        }
    }
}

fn list_block(node: Node<'_>, source: &str) -> Block {
    let mut items = Vec::new();
    let mut walk = node.walk();
    for item in node.named_children(&mut walk) {
        if item.kind() != "list_item" {
            continue;
        }
        let mut inner = item.walk();
        let text = item
            .named_children(&mut inner)
            .filter(|c| c.kind() == "paragraph")
            .map(|c| inline_text(c, source))
            .collect::<Vec<_>>()
            .join(" ");
        if !text.is_empty() {
            items.push(text);
        }
    }
    Block::Bullets { items }
}

/// Callouts are block quotes opening with a bold `**Tag:**` marker.
fn classify_tip(text: &str) -> TipKind {
    let head = text.trim_start_matches('*').trim_start();
    let tag = head
        .split([':', '*'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match tag.as_str() {
        "warning" | "caution" => TipKind::Warning,
        "success" | "goal" | "takeaway" => TipKind::Success,
        _ => TipKind::Info,
    }
}

fn inline_text(node: Node<'_>, source: &str) -> String {
    let mut walk = node.walk();
    let raw = node
        .named_children(&mut walk)
        .find(|c| c.kind() == "inline")
        .map_or_else(
            || node_text(node, source).to_string(),
            |c| node_text(c, source).to_string(),
        );
    normalize_ws(&raw)
}

/// Collapse a multi-line inline run into one line, stripping any block
/// quote continuation markers the node range still covers.
fn normalize_ws(raw: &str) -> String {
    raw.lines()
        .map(|l| l.trim_start().trim_start_matches('>').trim_start())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

#[cfg(test)]
#[path = "tests/parse.rs"]
mod tests;
