//! Markdown format implementation using tree-sitter-md.
//!
//! This module provides the tree-sitter grammar and queries for parsing
//! the guide's markdown sources, extracting structure from ATX-style
//! headings (# syntax) and fenced code blocks.

use crate::formats::Format;

/// Tree-sitter grammar hook-up for ATX-style markdown.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }
}
