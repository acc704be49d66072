//! The UI renders the application state into something visible.
//!
//! The layout is fixed: a sidebar listing the selectable sections, a
//! content pane that always reflects the current projection, and a bottom
//! bar for key help, status messages, or the pending command buffer. An
//! unknown active id projects to nothing, so the content pane renders as
//! an empty bordered region with no message.

use crate::app_state::{AppState, View};
use crate::config::Config;
use crate::render::ContentCache;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Renders the full frame from the current application state.
pub fn draw(f: &mut Frame, app: &AppState, cache: &ContentCache, cfg: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(cfg.sidebar_width), Constraint::Min(0)])
        .split(chunks[0]);

    draw_sidebar(f, app, panes[0]);
    draw_content(f, app, cache, panes[1]);
    draw_status(f, app, chunks[1]);
}

fn draw_sidebar(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let is_active = section.id == app.active_id;
            let marker = if is_active { "▸ " } else { "  " };
            let mut style = if is_active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if i == app.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let line = Line::from(vec![
                Span::raw(marker.to_string()),
                Span::raw(section.title.clone()),
            ]);
            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!("Sections ({})", app.sections.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_content(f: &mut Frame, app: &AppState, cache: &ContentCache, area: Rect) {
    if let Some(section) = app.project() {
        let lines = cache
            .lines(&section.id)
            .map_or_else(Vec::new, <[_]>::to_vec);
        let widget = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Section: {}", section.title)),
            )
            .scroll((app.scroll, 0));
        f.render_widget(widget, area);
    } else {
        // Unknown active id: empty region, no message.
        f.render_widget(Block::default().borders(Borders::ALL), area);
    }
}

fn draw_status(f: &mut Frame, app: &AppState, area: Rect) {
    let text = if app.current_view == View::Command {
        format!(":{}", app.command_buffer)
    } else if let Some(ref msg) = app.message {
        msg.clone()
    } else {
        "↑/↓: Navigate | Enter: Open | j/k: Scroll | Home/End: First/Last | :: Command | q: Quit"
            .to_string()
    };

    let widget = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}
