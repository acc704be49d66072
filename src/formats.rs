//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over the
//! tree-sitter grammar used to parse authored content (markdown today,
//! org-mode or restructuredtext plausible later) by providing the language
//! and the queries the parser needs.

pub mod markdown;

/// Grammar hook-up for an authored content format.
pub trait Format {
    /// Tree-sitter language for this format.
    fn language(&self) -> tree_sitter::Language;
    /// Query matching heading nodes, used to build section outlines.
    fn heading_query(&self) -> &str;
}
