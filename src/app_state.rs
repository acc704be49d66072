//! The core state machine holding the active section selection.
//!
//! A TUI needs a single source of truth that can be interrogated and
//! mutated as the user navigates. Here that truth is one value: the active
//! section id. Everything else (cursor row, scroll offset, command buffer)
//! is navigation chrome around it. The id-to-position index is built once
//! at construction and never changes, because the catalogue is fixed.
//!
//! The selection machine has one state per known id plus an implicit
//! unknown state:
//!
//! ```text
//! intro ──select("setup")──▶ setup ──select("setup")──▶ setup (idempotent)
//!   │
//!   └──select("zzz")──▶ unknown (empty projection, no error)
//!                          │
//!                          └──select("intro")──▶ intro
//! ```
//!
//! `select` accepts any string and never fails; `project` maps the active
//! id to its section, or to nothing when the id is unrecognised. There is
//! no terminal state and no escape semantics: every transition is
//! synchronous and the machine is live for the process lifetime.

use crate::section::Section;
use std::collections::HashMap;

#[derive(PartialEq)]
/// Determines which UI surface renders and how input is interpreted.
pub enum View {
    /// Sidebar navigation plus content pane.
    Browse,
    /// Captures vim-style command input after a ':' keystroke.
    Command,
}

/// Owns the active selection and the navigation state around it.
pub struct AppState {
    /// All sections of the catalogue, in display order.
    pub sections: Vec<Section>,
    /// Identifier of the section currently selected for display.
    ///
    /// Unconstrained: it may name no known section, in which case the
    /// projection is empty.
    pub active_id: String,
    /// Highlighted row in the sidebar, independent of the selection.
    pub cursor: usize,
    /// Active UI surface determining input handling.
    pub current_view: View,
    /// Accumulates vim-style command input after ':' is pressed.
    pub command_buffer: String,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Content pane scroll offset, reset on every selection.
    pub scroll: u16,
    /// Maximum line width for content wrapping.
    pub wrap_width: usize,
    /// Position of each known id, built once at construction.
    index: HashMap<String, usize>,
}

impl AppState {
    #[must_use]
    /// Initialises the state with the active id on the first section.
    ///
    /// An empty catalogue leaves the active id as the empty sentinel, so
    /// the projection starts empty instead of panicking.
    pub fn new(sections: Vec<Section>, wrap_width: usize) -> Self {
        let index: HashMap<String, usize> = sections
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
        let active_id = sections.first().map_or_else(String::new, |s| s.id.clone());

        Self {
            sections,
            active_id,
            cursor: 0,
            current_view: View::Browse,
            command_buffer: String::new(),
            message: None,
            scroll: 0,
            wrap_width,
            index,
        }
    }

    /// Overwrite the active id, unconditionally.
    ///
    /// No validation happens here: an unknown id is accepted silently and
    /// simply projects to nothing. Selecting resets the content scroll,
    /// and a known id pulls the sidebar cursor along with it.
    pub fn select(&mut self, id: &str) {
        self.active_id = id.to_string();
        self.scroll = 0;
        if let Some(&i) = self.index.get(id) {
            self.cursor = i;
        }
    }

    #[must_use]
    /// Map the active id to its section, if the id is known.
    ///
    /// Pure lookup: no side effects, no I/O. An unrecognised active id
    /// projects to `None`.
    pub fn project(&self) -> Option<&Section> {
        self.index.get(&self.active_id).map(|&i| &self.sections[i])
    }

    /// Select the section under the sidebar cursor.
    pub fn select_cursor(&mut self) {
        if let Some(section) = self.sections.get(self.cursor) {
            let id = section.id.clone();
            self.select(&id);
        }
    }

    #[must_use]
    /// Returns the following section index for sequential navigation.
    pub fn find_next_section(&self) -> Option<usize> {
        if self.cursor + 1 < self.sections.len() {
            Some(self.cursor + 1)
        } else {
            None
        }
    }

    #[must_use]
    /// Returns the preceding section index for reverse navigation.
    pub fn find_prev_section(&self) -> Option<usize> {
        if self.cursor > 0 {
            Some(self.cursor - 1)
        } else {
            None
        }
    }

    /// Move the sidebar cursor up one row.
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the sidebar cursor down one row.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.sections.len() {
            self.cursor += 1;
        }
    }

    /// Jump the sidebar cursor to the first section.
    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    /// Jump the sidebar cursor to the last section.
    pub fn cursor_last(&mut self) {
        self.cursor = self.sections.len().saturating_sub(1);
    }

    /// Scroll the content pane up one line.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll the content pane down one line, clamped to the content.
    pub fn scroll_down(&mut self, max: u16) {
        self.scroll = self.scroll.saturating_add(1).min(max);
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
