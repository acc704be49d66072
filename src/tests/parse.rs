use super::{outline, parse_blocks};
use crate::formats::markdown::MarkdownFormat;
use crate::section::{Block, TipKind};

const SAMPLE: &str = "Opening paragraph here.\n\n\
## First Heading\n\n\
Some prose with `code` inline.\n\n\
```typescript\nconst x: number = 1;\n```\n\n\
> **Warning:** Do not do the thing.\n\n\
- one\n\
- two\n\n\
## Second Heading\n\n\
More prose.\n";

#[test]
fn test_blocks_classified_in_document_order() {
    let blocks = parse_blocks(SAMPLE, &MarkdownFormat).unwrap();

    assert!(
        matches!(&blocks[0], Block::Paragraph { text } if text == "Opening paragraph here."),
        "expected opening paragraph, got {:?}",
        blocks[0]
    );
    assert!(
        matches!(&blocks[1], Block::Heading { level: 2, text } if text == "First Heading"),
        "expected heading, got {:?}",
        blocks[1]
    );
    assert!(matches!(&blocks[2], Block::Paragraph { .. }));
    assert!(
        matches!(&blocks[3], Block::Code { lang, source }
            if lang == "typescript" && source == "const x: number = 1;"),
        "expected code block, got {:?}",
        blocks[3]
    );
    assert!(matches!(&blocks[4], Block::Tip { .. }));
    assert!(
        matches!(&blocks[5], Block::Bullets { items } if items == &["one", "two"]),
        "expected bullets, got {:?}",
        blocks[5]
    );
    assert!(
        matches!(&blocks[6], Block::Heading { level: 2, text } if text == "Second Heading")
    );
    assert!(matches!(&blocks[7], Block::Paragraph { text } if text == "More prose."));
    assert_eq!(blocks.len(), 8);
}

#[test]
fn test_tip_text_keeps_marker_and_classifies() {
    let blocks = parse_blocks(SAMPLE, &MarkdownFormat).unwrap();
    let Block::Tip { kind, text } = &blocks[4] else {
        panic!("expected tip, got {:?}", blocks[4]);
    };
    assert_eq!(*kind, TipKind::Warning);
    assert!(text.contains("Do not do the thing."), "tip text: {text}");
}

#[test]
fn test_tip_kinds_follow_markers() {
    let src = "> **Tip:** a\n\n> **Warning:** b\n\n> **Success:** c\n\n> plain quote\n";
    let blocks = parse_blocks(src, &MarkdownFormat).unwrap();
    let kinds: Vec<TipKind> = blocks
        .iter()
        .filter_map(|b| match b {
            Block::Tip { kind, .. } => Some(*kind),
            _ => None,
        })
        .collect();
    assert_eq!(
        kinds,
        [
            TipKind::Info,
            TipKind::Warning,
            TipKind::Success,
            TipKind::Info
        ]
    );
}

#[test]
fn test_multiline_quote_collapses_to_one_line() {
    let src = "> **Tip:** spread over\n> two source lines.\n";
    let blocks = parse_blocks(src, &MarkdownFormat).unwrap();
    let Block::Tip { text, .. } = &blocks[0] else {
        panic!("expected tip, got {:?}", blocks[0]);
    };
    assert!(
        text.contains("spread over two source lines."),
        "tip text: {text}"
    );
}

#[test]
fn test_code_fence_without_language() {
    let src = "```\nplain\n```\n";
    let blocks = parse_blocks(src, &MarkdownFormat).unwrap();
    assert!(
        matches!(&blocks[0], Block::Code { lang, source } if lang.is_empty() && source == "plain")
    );
}

#[test]
fn test_thematic_break_becomes_rule() {
    let blocks = parse_blocks("before\n\n---\n\nafter\n", &MarkdownFormat).unwrap();
    assert!(blocks.iter().any(|b| matches!(b, Block::Rule)));
}

#[test]
fn test_empty_source_yields_no_blocks() {
    let blocks = parse_blocks("", &MarkdownFormat).unwrap();
    assert!(blocks.is_empty());
}

#[test]
fn test_outline_lists_headings_in_order() {
    let entries = outline(SAMPLE, &MarkdownFormat).unwrap();
    let flat: Vec<(usize, &str)> = entries
        .iter()
        .map(|e| (e.level, e.title.as_str()))
        .collect();
    assert_eq!(flat, [(2, "First Heading"), (2, "Second Heading")]);
}

#[test]
fn test_outline_of_plain_prose_is_empty() {
    let entries = outline("just a paragraph\n", &MarkdownFormat).unwrap();
    assert!(entries.is_empty());
}
