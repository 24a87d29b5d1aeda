#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! One JSON object per line, each tagged with a `type` field:
//! - `theme` records, one per theme, in listing order
//! - a single `current` record for the active theme

use crate::theme::CurrentTheme;
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    pub fn format_theme_list(&self, names: &[String]) -> String {
        let mut output = String::new();

        for name in names {
            let record = ThemeRecord {
                record_type: "theme",
                name,
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }

    pub fn format_current(&self, current: &CurrentTheme) -> String {
        let record = CurrentRecord {
            record_type: "current",
            current,
        };

        match serde_json::to_string(&record) {
            Ok(json) => json + "\n",
            Err(_) => String::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ThemeRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct CurrentRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    #[serde(flatten)]
    current: &'a CurrentTheme,
}
