#![forbid(unsafe_code)]

//! Theme application
//!
//! Applying a theme copies every key of the theme section into the active
//! `Configuration` section. Keys the theme does not mention are left alone,
//! so applying the same theme twice is the same as applying it once.

use crate::config::Document;
use crate::error::StoreError;
use std::path::Path;
use tracing::{debug, info};

/// Section of `terminalrc` holding the effective settings
pub const ACTIVE_SECTION: &str = "Configuration";

/// What an application changed in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Whether the themes document has a section with the requested name
    pub theme_found: bool,
    /// Number of keys written into the active section
    pub keys_copied: usize,
}

/// Copies the keys of `theme_name` into the active section of `config`
///
/// An unknown theme copies nothing.
pub fn apply_theme(config: &mut Document, themes: &Document, theme_name: &str) -> ApplyOutcome {
    let active = config.section_mut(ACTIVE_SECTION);

    let Some(theme) = themes.section(theme_name) else {
        info!(theme = theme_name, "theme not found, nothing to copy");
        return ApplyOutcome {
            theme_found: false,
            keys_copied: 0,
        };
    };

    let mut keys_copied = 0;
    for (key, value) in theme.entries() {
        active.set(key, value);
        keys_copied += 1;
    }

    debug!(theme = theme_name, keys_copied, "applied theme");
    ApplyOutcome {
        theme_found: true,
        keys_copied,
    }
}

/// Applies `theme_name` and writes `config` to `path`
///
/// There is no rollback: if the write fails the in-memory change stays.
pub fn apply_theme_and_save(
    config: &mut Document,
    themes: &Document,
    theme_name: &str,
    path: &Path,
) -> Result<ApplyOutcome, StoreError> {
    let outcome = apply_theme(config, themes, theme_name);
    config.save(path)?;
    Ok(outcome)
}
