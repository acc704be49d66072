//! Section and content-block representation for the guide.
//!
//! A section is one named, fixed unit of tutorial content with a stable
//! identifier and a display title. Its body is a sequence of typed blocks
//! parsed once at startup from the embedded markdown source; blocks carry
//! everything the renderer needs and nothing about presentation.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One fixed unit of tutorial content with a stable identifier.
pub struct Section {
    /// Stable identifier used for selection (`intro`, `setup`, ...).
    pub id: String,
    /// Human-readable title shown in the sidebar and content pane.
    pub title: String,
    /// Parsed content blocks in document order.
    pub blocks: Vec<Block>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// A renderable unit of section content.
pub enum Block {
    /// Sub-heading within a section.
    Heading {
        /// Heading depth (2 for the top sub-headings in a section).
        level: usize,
        /// Heading text without markup symbols.
        text: String,
    },
    /// Prose paragraph, unwrapped (the renderer wraps to width).
    Paragraph {
        /// Paragraph text with inline markup intact.
        text: String,
    },
    /// Fenced code sample.
    Code {
        /// Language token from the fence info string.
        lang: String,
        /// Verbatim code sample content.
        source: String,
    },
    /// Callout box rendered with a colored bar.
    Tip {
        /// Callout flavor, derived from the leading `**Tag:**` marker.
        kind: TipKind,
        /// Callout body text.
        text: String,
    },
    /// Bullet list, one entry per item.
    Bullets {
        /// List entries in document order.
        items: Vec<String>,
    },
    /// Horizontal rule.
    Rule,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Flavor of a callout block, matching the tutorial's three styles.
pub enum TipKind {
    /// Neutral hints and asides.
    Info,
    /// Pitfalls the reader should avoid.
    Warning,
    /// Milestones and takeaways.
    Success,
}
