//! Rendering of content blocks into styled terminal lines.
//!
//! Wrapping happens here, at the configured width rather than the terminal
//! width, so the rendered lines can be built once per section and reused
//! across draws. Inline markup is light: backtick runs style as code,
//! double-asterisk runs as bold, and the markers themselves are dropped.

use crate::highlight::Highlighter;
use crate::section::{Block, Section, TipKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::collections::HashMap;

/// Pre-rendered content lines for every section, keyed by id.
pub struct ContentCache {
    rendered: HashMap<String, Vec<Line<'static>>>,
}

impl ContentCache {
    #[must_use]
    /// Render every section once at the given wrap width.
    pub fn build(sections: &[Section], highlighter: &Highlighter, width: usize) -> Self {
        let rendered = sections
            .iter()
            .map(|s| (s.id.clone(), render_blocks(&s.blocks, highlighter, width)))
            .collect();
        Self { rendered }
    }

    #[must_use]
    /// Rendered lines for a section id, if the id is known.
    pub fn lines(&self, id: &str) -> Option<&[Line<'static>]> {
        self.rendered.get(id).map(Vec::as_slice)
    }

    #[must_use]
    /// Line count of a section's rendered content, 0 for unknown ids.
    pub fn height(&self, id: &str) -> u16 {
        self.rendered
            .get(id)
            .map_or(0, |lines| u16::try_from(lines.len()).unwrap_or(u16::MAX))
    }
}

/// Render a block sequence into styled lines at the given wrap width.
#[must_use]
pub fn render_blocks(blocks: &[Block], highlighter: &Highlighter, width: usize) -> Vec<Line<'static>> {
    let mut out: Vec<Line<'static>> = Vec::new();
    for block in blocks {
        if !out.is_empty() {
            out.push(Line::default());
        }
        match block {
            Block::Heading { level, text } => {
                out.push(Line::from(Span::styled(text.clone(), heading_style(*level))));
            }
            Block::Paragraph { text } => {
                for line in wrap(text, width) {
                    out.push(Line::from(inline_spans(&line, Style::default())));
                }
            }
            Block::Code { lang, source } => {
                if !lang.is_empty() {
                    out.push(Line::from(Span::styled(
                        format!("· {lang}"),
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    )));
                }
                out.extend(highlighter.highlight(lang, source));
            }
            Block::Tip { kind, text } => {
                let bar = Style::default().fg(tip_color(*kind));
                for line in wrap(text, width.saturating_sub(2)) {
                    let mut spans = vec![Span::styled("▌ ", bar)];
                    spans.extend(inline_spans(&line, Style::default()));
                    out.push(Line::from(spans));
                }
            }
            Block::Bullets { items } => {
                for item in items {
                    for (i, line) in wrap(item, width.saturating_sub(2)).iter().enumerate() {
                        let marker = if i == 0 { "• " } else { "  " };
                        let mut spans = vec![Span::raw(marker.to_string())];
                        spans.extend(inline_spans(line, Style::default()));
                        out.push(Line::from(spans));
                    }
                }
            }
            Block::Rule => {
                out.push(Line::from(Span::styled(
                    "─".repeat(width.clamp(1, 120)),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }
    out
}

/// Greedy word wrap; words longer than the width get their own line.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn heading_style(level: usize) -> Style {
    let color = match level {
        1 => Color::Cyan,
        2 => Color::Blue,
        3 => Color::Magenta,
        _ => Color::White,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn tip_color(kind: TipKind) -> Color {
    match kind {
        TipKind::Info => Color::Blue,
        TipKind::Warning => Color::Yellow,
        TipKind::Success => Color::Green,
    }
}

fn inline_spans(text: &str, base: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut buf = String::new();
    let mut bold = false;
    let mut code = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '`' => {
                flush(&mut spans, &mut buf, bold, code, base);
                code = !code;
            }
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                flush(&mut spans, &mut buf, bold, code, base);
                bold = !bold;
            }
            _ => buf.push(c),
        }
    }
    flush(&mut spans, &mut buf, bold, code, base);
    if spans.is_empty() {
        spans.push(Span::raw(String::new()));
    }
    spans
}

fn flush(spans: &mut Vec<Span<'static>>, buf: &mut String, bold: bool, code: bool, base: Style) {
    if buf.is_empty() {
        return;
    }
    let mut style = base;
    if code {
        style = style.fg(Color::Yellow);
    }
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    spans.push(Span::styled(std::mem::take(buf), style));
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
