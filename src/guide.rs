//! The fixed catalogue of guide sections.
//!
//! Sections are authored as markdown under `content/` and embedded at
//! compile time; nothing is created, mutated, or destroyed at runtime.
//! Catalogue order is display order, and the first entry is the section
//! selected at startup.

use crate::formats::markdown::MarkdownFormat;
use crate::parse;
use crate::section::Section;
use std::io;

/// Build-time record pairing a section id with its embedded source.
pub struct SectionSource {
    /// Stable identifier used for selection.
    pub id: &'static str,
    /// Display title shown in the sidebar.
    pub title: &'static str,
    /// Embedded markdown source.
    pub source: &'static str,
}

/// The catalogue, in display order.
pub const SOURCES: &[SectionSource] = &[
    SectionSource {
        id: "intro",
        title: "Introduction",
        source: include_str!("../content/intro.md"),
    },
    SectionSource {
        id: "setup",
        title: "Setup",
        source: include_str!("../content/setup.md"),
    },
    SectionSource {
        id: "basics",
        title: "Basic Types",
        source: include_str!("../content/basics.md"),
    },
    SectionSource {
        id: "functions",
        title: "Functions",
        source: include_str!("../content/functions.md"),
    },
    SectionSource {
        id: "objects",
        title: "Objects & Interfaces",
        source: include_str!("../content/objects.md"),
    },
    SectionSource {
        id: "classes",
        title: "Classes",
        source: include_str!("../content/classes.md"),
    },
    SectionSource {
        id: "generics",
        title: "Generics",
        source: include_str!("../content/generics.md"),
    },
    SectionSource {
        id: "advanced",
        title: "Advanced Concepts",
        source: include_str!("../content/advanced.md"),
    },
];

/// Parse the embedded catalogue into runtime sections.
///
/// # Errors
///
/// Returns an error if any embedded source fails to parse.
pub fn load() -> io::Result<Vec<Section>> {
    let format = MarkdownFormat;
    SOURCES
        .iter()
        .map(|src| {
            Ok(Section {
                id: src.id.to_string(),
                title: src.title.to_string(),
                blocks: parse::parse_blocks(src.source, &format)?,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/guide.rs"]
mod tests;
