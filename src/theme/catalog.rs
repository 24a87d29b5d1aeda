#![forbid(unsafe_code)]

//! Theme catalog
//!
//! Every section of the themes document except the default one is a theme.

use crate::config::{DEFAULT_SECTION, Document};

/// Returns the theme names in `themes`, sorted by byte order
pub fn list_theme_names(themes: &Document) -> Vec<String> {
    let mut names: Vec<String> = themes
        .section_names()
        .filter(|name| *name != DEFAULT_SECTION)
        .map(str::to_string)
        .collect();

    names.sort();
    names
}
