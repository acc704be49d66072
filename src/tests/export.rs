use super::{to_json, write_json, GuideExport};
use crate::section::{Block, Section, TipKind};
use std::fs;
use tempfile::NamedTempFile;

fn sample() -> Vec<Section> {
    vec![Section {
        id: "intro".to_string(),
        title: "Introduction".to_string(),
        blocks: vec![
            Block::Heading {
                level: 2,
                text: "Why".to_string(),
            },
            Block::Paragraph {
                text: "Because types.".to_string(),
            },
            Block::Code {
                lang: "typescript".to_string(),
                source: "const x: number = 1;".to_string(),
            },
            Block::Tip {
                kind: TipKind::Info,
                text: "**Tip:** read on.".to_string(),
            },
            Block::Bullets {
                items: vec!["one".to_string(), "two".to_string()],
            },
            Block::Rule,
        ],
    }]
}

#[test]
fn test_json_round_trips_every_block_variant() {
    let sections = sample();
    let json = to_json(&sections).unwrap();
    let back: GuideExport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.sections, sections);
}

#[test]
fn test_blocks_are_internally_tagged() {
    let json = to_json(&sample()).unwrap();
    assert!(json.contains("\"type\": \"code\""), "json: {json}");
    assert!(json.contains("\"type\": \"heading\""));
    assert!(json.contains("\"kind\": \"info\""));
}

#[test]
fn test_write_json_creates_the_file() {
    let file = NamedTempFile::new().unwrap();
    write_json(file.path(), &sample()).unwrap();
    let content = fs::read_to_string(file.path()).unwrap();
    assert!(content.contains("\"sections\""));
    assert!(content.contains("\"id\": \"intro\""));
}
