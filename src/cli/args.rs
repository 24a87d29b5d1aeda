#![forbid(unsafe_code)]

//! Command-line argument definitions
//!
//! clap's automatic `--help` and `--version` are disabled: both are regular
//! flags here so the dispatcher decides where their output goes.

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "xfce4-terminal-themes",
    disable_help_flag = true,
    disable_version_flag = true,
    help_template = "{usage-heading} {usage}\n\n{all-args}\n"
)]
pub struct Cli {
    /// List theme names
    #[arg(short = 'l', long = "themes")]
    pub list_themes: bool,

    /// Display current theme
    #[arg(short, long)]
    pub current: bool,

    /// Show version
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Show help
    #[arg(short, long)]
    pub help: bool,

    /// When to color output
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Output format for --themes and --current
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Theme to apply; separate words are joined with single spaces
    #[arg(value_name = "THEME NAME")]
    pub theme: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves the choice for a stream
    ///
    /// `auto` never colors a stream that is not a terminal; termcolor
    /// additionally honors `NO_COLOR` and `TERM=dumb`.
    pub fn for_stream(self, is_terminal: bool) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Auto if is_terminal => termcolor::ColorChoice::Auto,
            ColorChoice::Auto => termcolor::ColorChoice::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Human,
    /// One JSON object per line
    Jsonl,
}
