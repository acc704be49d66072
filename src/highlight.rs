//! Syntax highlighting of code samples via syntect.
//!
//! The syntax and theme sets are loaded once and reused for every sample.
//! The default syntax dump carries no TypeScript grammar, so TypeScript
//! fences fall back to the JavaScript grammar, and anything still unknown
//! renders as plain text.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Falls back when the configured theme name is unknown.
const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Reusable syntax and theme state for highlighting code samples.
pub struct Highlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    #[must_use]
    /// Load the default syntax set and the named theme.
    pub fn new(theme_name: &str) -> Self {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let mut themes = ThemeSet::load_defaults();
        let theme = themes
            .themes
            .remove(theme_name)
            .or_else(|| themes.themes.remove(DEFAULT_THEME))
            .unwrap_or_default();
        Self { syntaxes, theme }
    }

    #[must_use]
    /// Highlight a code sample into styled lines.
    ///
    /// Lines that fail to highlight degrade to unstyled text rather than
    /// dropping content.
    pub fn highlight(&self, lang: &str, source: &str) -> Vec<Line<'static>> {
        let Some(syntax) = self.find_syntax(lang) else {
            return source
                .lines()
                .map(|l| Line::from(l.to_string()))
                .collect();
        };

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(source) {
            match highlighter.highlight_line(line, &self.syntaxes) {
                Ok(ranges) => {
                    let spans: Vec<Span<'static>> = ranges
                        .iter()
                        .map(|(style, text)| {
                            Span::styled(
                                text.trim_end_matches('\n').to_string(),
                                convert_style(*style),
                            )
                        })
                        .collect();
                    lines.push(Line::from(spans));
                }
                Err(_) => lines.push(Line::from(line.trim_end_matches('\n').to_string())),
            }
        }
        lines
    }

    fn find_syntax(&self, lang: &str) -> Option<&syntect::parsing::SyntaxReference> {
        let token = match lang {
            "typescript" | "ts" | "tsx" => "js",
            "" => return None,
            other => other,
        };
        self.syntaxes
            .find_syntax_by_token(token)
            .or_else(|| self.syntaxes.find_syntax_by_token("js"))
    }
}

fn convert_style(style: syntect::highlighting::Style) -> Style {
    let mut out = Style::default().fg(Color::Rgb(
        style.foreground.r,
        style.foreground.g,
        style.foreground.b,
    ));
    if style.font_style.contains(FontStyle::BOLD) {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        out = out.add_modifier(Modifier::ITALIC);
    }
    out
}

#[cfg(test)]
#[path = "tests/highlight.rs"]
mod tests;
