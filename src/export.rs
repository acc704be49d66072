//! JSON export of the parsed guide for external tooling.
//!
//! The export mirrors the runtime model one-to-one: sections in display
//! order, blocks internally tagged by type, so consumers can rebuild the
//! exact structure the viewer renders.

use crate::section::Section;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Serialize, Deserialize, Clone)]
/// Serialisable wrapper around the full catalogue.
pub struct GuideExport {
    /// All sections in display order.
    pub sections: Vec<Section>,
}

/// Serialize the catalogue to pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(sections: &[Section]) -> io::Result<String> {
    serde_json::to_string_pretty(&GuideExport {
        sections: sections.to_vec(),
    })
    .map_err(io::Error::other)
}

/// Write the catalogue to a file as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub fn write_json(path: &Path, sections: &[Section]) -> io::Result<()> {
    fs::write(path, to_json(sections)?)
}

#[cfg(test)]
#[path = "tests/export.rs"]
mod tests;
