#![forbid(unsafe_code)]

//! Name and font of the active theme

use crate::config::Document;
use crate::theme::ACTIVE_SECTION;
use serde::Serialize;

const THEME_NAME_KEY: &str = "ThemeName";
const FONT_NAME_KEY: &str = "FontName";

/// Theme and font recorded in the active configuration
///
/// Missing keys read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurrentTheme {
    pub theme_name: String,
    pub font_name: String,
}

impl CurrentTheme {
    pub fn from_config(config: &Document) -> Self {
        match config.section(ACTIVE_SECTION) {
            Some(section) => CurrentTheme {
                theme_name: section.value(THEME_NAME_KEY).to_string(),
                font_name: section.value(FONT_NAME_KEY).to_string(),
            },
            None => CurrentTheme::default(),
        }
    }
}
