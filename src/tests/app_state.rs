use super::AppState;
use crate::section::{Block, Section};

fn section(id: &str, title: &str, body: &str) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        blocks: vec![Block::Paragraph {
            text: body.to_string(),
        }],
    }
}

fn fixture() -> Vec<Section> {
    vec![
        section("intro", "Introduction", "intro body"),
        section("setup", "Setup", "setup body"),
        section("basics", "Basic Types", "basics body"),
    ]
}

#[test]
fn test_startup_projects_first_section() {
    let app = AppState::new(fixture(), 100);
    let projected = app.project().expect("startup projection should be non-empty");
    assert_eq!(projected.id, "intro");
    assert_eq!(
        projected.blocks,
        vec![Block::Paragraph {
            text: "intro body".to_string()
        }]
    );
}

#[test]
fn test_select_known_id_projects_registered_content() {
    let mut app = AppState::new(fixture(), 100);
    app.select("setup");
    let projected = app.project().unwrap();
    assert_eq!(projected.id, "setup");
    assert_eq!(
        projected.blocks,
        vec![Block::Paragraph {
            text: "setup body".to_string()
        }]
    );
}

#[test]
fn test_select_is_idempotent() {
    let mut app = AppState::new(fixture(), 100);
    app.select("setup");
    let first = app.project().unwrap().clone();
    app.select("setup");
    let second = app.project().unwrap().clone();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_id_projects_nothing() {
    let mut app = AppState::new(fixture(), 100);
    app.select("setup");
    app.select("zzz");
    // Not the previous content, not an error: just empty.
    assert!(app.project().is_none());
}

#[test]
fn test_known_id_recovers_after_unknown() {
    let mut app = AppState::new(fixture(), 100);
    app.select("zzz");
    assert!(app.project().is_none());
    app.select("intro");
    assert_eq!(app.project().unwrap().id, "intro");
}

#[test]
fn test_every_known_id_is_reachable() {
    let sections = fixture();
    let ids: Vec<String> = sections.iter().map(|s| s.id.clone()).collect();
    let mut app = AppState::new(sections, 100);
    for id in &ids {
        app.select(id);
        assert_eq!(app.project().unwrap().id, *id);
    }
}

#[test]
fn test_empty_catalogue_projects_nothing() {
    let app = AppState::new(Vec::new(), 100);
    assert!(app.project().is_none());
    assert!(app.active_id.is_empty());
}

#[test]
fn test_select_resets_scroll_and_moves_cursor() {
    let mut app = AppState::new(fixture(), 100);
    app.scroll = 5;
    app.select("basics");
    assert_eq!(app.scroll, 0);
    assert_eq!(app.cursor, 2);
}

#[test]
fn test_unknown_id_leaves_cursor_in_place() {
    let mut app = AppState::new(fixture(), 100);
    app.select("setup");
    app.select("zzz");
    assert_eq!(app.cursor, 1);
}

#[test]
fn test_cursor_navigation_clamps_at_both_ends() {
    let mut app = AppState::new(fixture(), 100);
    app.cursor_up();
    assert_eq!(app.cursor, 0);
    app.cursor_last();
    assert_eq!(app.cursor, 2);
    app.cursor_down();
    assert_eq!(app.cursor, 2);
    app.cursor_first();
    assert_eq!(app.cursor, 0);
}

#[test]
fn test_select_cursor_follows_highlight() {
    let mut app = AppState::new(fixture(), 100);
    app.cursor_down();
    app.select_cursor();
    assert_eq!(app.project().unwrap().id, "setup");
}

#[test]
fn test_sequential_navigation_bounds() {
    let mut app = AppState::new(fixture(), 100);
    assert_eq!(app.find_next_section(), Some(1));
    assert_eq!(app.find_prev_section(), None);
    app.cursor_last();
    assert_eq!(app.find_next_section(), None);
    assert_eq!(app.find_prev_section(), Some(1));
}

#[test]
fn test_scroll_clamps_to_content() {
    let mut app = AppState::new(fixture(), 100);
    app.scroll_up();
    assert_eq!(app.scroll, 0);
    app.scroll_down(2);
    app.scroll_down(2);
    app.scroll_down(2);
    assert_eq!(app.scroll, 2);
}
