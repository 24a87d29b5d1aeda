#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support
//!
//! The plain text produced here is the tool's stable output format; colors
//! only decorate it when enabled. Every `format_*` and `write_*` pair shares
//! one renderer, so both always produce the same text.

use crate::error::Error;
use crate::theme::CurrentTheme;
use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const THEME_NAME_LABEL: &str = "Theme name:";
const FONT_NAME_LABEL: &str = "Font name:";

/// Human-readable output formatter
pub struct HumanFormatter {
    color_choice: ColorChoice,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanFormatter { color_choice }
    }

    /// One theme name per line
    pub fn format_theme_list(&self, names: &[String]) -> String {
        plain_text(|out| self.render_theme_list(out, names))
    }

    /// `Theme name: ...` and `Font name: ...` lines
    pub fn format_current(&self, current: &CurrentTheme) -> String {
        plain_text(|out| self.render_current(out, current))
    }

    pub fn format_error(&self, error: &Error) -> String {
        plain_text(|out| self.render_error(out, error))
    }

    pub fn write_theme_list(&self, names: &[String]) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.render_theme_list(&mut stdout, names)?;
        stdout.flush()
    }

    pub fn write_current(&self, current: &CurrentTheme) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.render_current(&mut stdout, current)?;
        stdout.flush()
    }

    /// Reports a fatal error on stdout
    pub fn write_error(&self, error: &Error) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.render_error(&mut stdout, error)?;
        stdout.flush()
    }

    fn render_theme_list<W: WriteColor>(&self, out: &mut W, names: &[String]) -> io::Result<()> {
        for name in names {
            writeln!(out, "{}", name)?;
        }
        Ok(())
    }

    fn render_current<W: WriteColor>(
        &self,
        out: &mut W,
        current: &CurrentTheme,
    ) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{}", THEME_NAME_LABEL)?;
        out.reset()?;
        writeln!(out, " {}", current.theme_name)?;

        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{}", FONT_NAME_LABEL)?;
        out.reset()?;
        writeln!(out, " {}", current.font_name)
    }

    fn render_error<W: WriteColor>(&self, out: &mut W, error: &Error) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", error_label(error))?;
        out.reset()?;
        writeln!(out, " {}", error)
    }
}

fn error_label(error: &Error) -> &'static str {
    match error {
        Error::ConfigDirUnavailable => "Failed to locate configuration:",
        Error::Load(_) => "Failed to read file:",
        Error::Output(_) => "Failed to write output:",
    }
}

fn plain_text(render: impl FnOnce(&mut Buffer) -> io::Result<()>) -> String {
    let mut buffer = Buffer::no_color();
    match render(&mut buffer) {
        Ok(()) => String::from_utf8_lossy(buffer.as_slice()).into_owned(),
        Err(_) => String::new(),
    }
}
