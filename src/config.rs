//! Configuration to acknowledge reader preferences as well as set defaults.
//!
//! Specifically, we try to find a tsguide.toml, and if present we load
//! settings from there. This provides wrapping width, sidebar width, and
//! the syntax highlighting theme.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from tsguide.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 100)]
    /// Maximum line width for content text wrapping.
    pub wrap_width: usize,
    #[facet(default = 30)]
    /// Column width of the section sidebar.
    pub sidebar_width: u16,
    #[facet(default = "base16-ocean.dark".to_string())]
    /// Syntect theme used for code samples.
    pub theme: String,
}

impl Config {
    #[must_use]
    /// Load configuration from tsguide.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("tsguide.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
