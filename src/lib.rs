#![forbid(unsafe_code)]

//! xfce4-terminal-themes: switch xfce4-terminal presets from the command line
//!
//! Themes are sections of `~/.config/xfce4/terminal/themes`. Applying one copies
//! its keys into the `Configuration` section of `terminalrc`.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod theme;

pub use error::{Error, Result};
