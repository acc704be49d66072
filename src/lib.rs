//! tsguide: a terminal guide to TypeScript's type system.
//!
//! A fixed catalogue of tutorial sections, authored as markdown and
//! embedded at compile time, browsed from a sidebar with the selected
//! section rendered with syntax highlighting in a content pane. The
//! interactive core is a single piece of state: the active section id,
//! overwritten by selection and mapped to content by a pure projection.
#![allow(clippy::module_name_repetitions, clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod export;
pub mod formats;
pub mod guide;
pub mod highlight;
pub mod parse;
pub mod render;
pub mod section;
pub mod ui;
