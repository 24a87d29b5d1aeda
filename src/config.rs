//! Configuration file locations and INI document storage

pub mod document;
pub mod paths;

pub use document::{DEFAULT_SECTION, Document, Section};
pub use paths::{CONFIG_FILE_NAME, ConfigPaths, THEMES_FILE_NAME};
