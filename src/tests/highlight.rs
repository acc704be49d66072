use super::Highlighter;

#[test]
fn test_typescript_highlights_via_javascript_grammar() {
    let hl = Highlighter::new("base16-ocean.dark");
    let lines = hl.highlight("typescript", "const x = 1;\n");
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].spans.is_empty());
}

#[test]
fn test_untagged_source_renders_plain() {
    let hl = Highlighter::new("base16-ocean.dark");
    let lines = hl.highlight("", "plain text\nsecond line\n");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].spans.len(), 1);
}

#[test]
fn test_unknown_theme_falls_back_without_panicking() {
    let hl = Highlighter::new("no-such-theme");
    let lines = hl.highlight("json", "{\"k\": 1}\n");
    assert_eq!(lines.len(), 1);
}

#[test]
fn test_line_count_matches_source() {
    let hl = Highlighter::new("base16-ocean.dark");
    let source = "const a = 1;\nconst b = 2;\nconst c = 3;\n";
    assert_eq!(hl.highlight("js", source).len(), 3);
}
