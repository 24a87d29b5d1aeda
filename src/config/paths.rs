#![forbid(unsafe_code)]

//! Location of the xfce4-terminal configuration files
//!
//! Both files live under `<base>/xfce4/terminal/`, where `<base>` is
//! `$XDG_HOME` when it is set and non-empty, and `$HOME/.config` otherwise.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the active configuration
pub const CONFIG_FILE_NAME: &str = "terminalrc";

/// File name of the themes catalog
pub const THEMES_FILE_NAME: &str = "themes";

/// Environment variable overriding the base config directory
pub const XDG_HOME_VAR: &str = "XDG_HOME";

/// Resolved locations of the terminal configuration files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    base: PathBuf,
}

impl ConfigPaths {
    /// Resolves the base directory from the process environment
    pub fn from_env() -> Result<Self> {
        let xdg_home = std::env::var(XDG_HOME_VAR).ok();
        let home = std::env::var("HOME").ok();
        let paths = Self::resolve(xdg_home.as_deref(), home.as_deref(), dirs::home_dir)?;
        debug!(base = %paths.base.display(), "resolved configuration directory");
        Ok(paths)
    }

    /// Resolves the base directory from explicit environment values
    ///
    /// `fallback_home` is consulted only when `HOME` is unset.
    pub fn resolve(
        xdg_home: Option<&str>,
        home: Option<&str>,
        fallback_home: impl FnOnce() -> Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(dir) = xdg_home.map(str::trim)
            && !dir.is_empty()
        {
            return Ok(Self::with_base(dir));
        }

        let home = match home {
            Some(home) => PathBuf::from(home),
            None => fallback_home().ok_or(Error::ConfigDirUnavailable)?,
        };

        Ok(Self::with_base(home.join(".config")))
    }

    /// Uses `base` directly as the config directory
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path of a file inside the xfce4-terminal config directory
    pub fn file_path_for(&self, name: &str) -> PathBuf {
        self.base.join("xfce4").join("terminal").join(name)
    }

    pub fn config_file(&self) -> PathBuf {
        self.file_path_for(CONFIG_FILE_NAME)
    }

    pub fn themes_file(&self) -> PathBuf {
        self.file_path_for(THEMES_FILE_NAME)
    }
}
