#![forbid(unsafe_code)]

//! Action selection and execution
//!
//! Exactly one action runs per invocation. When several flags are given the
//! first match wins, in this order: help, list themes, show current, show
//! version, apply the positional theme name, show usage.

use crate::cli::args::{Cli, ColorChoice, OutputFormat};
use crate::config::{ConfigPaths, Document};
use crate::error::{Error, Result};
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::theme::{CurrentTheme, apply_theme_and_save, list_theme_names};
use clap::CommandFactory;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, error, warn};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Version reported by `--version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The single thing an invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    ListThemes,
    ShowCurrent,
    ShowVersion,
    Apply(String),
    ShowUsage,
}

impl Action {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.help {
            Action::Help
        } else if cli.list_themes {
            Action::ListThemes
        } else if cli.current {
            Action::ShowCurrent
        } else if cli.version {
            Action::ShowVersion
        } else if !cli.theme.is_empty() {
            Action::Apply(cli.theme.join(" "))
        } else {
            Action::ShowUsage
        }
    }

    /// Whether the action reads the configuration files
    pub fn needs_documents(&self) -> bool {
        matches!(
            self,
            Action::ListThemes | Action::ShowCurrent | Action::Apply(_)
        )
    }
}

/// Immutable options for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub action: Action,
    pub color: ColorChoice,
    pub format: OutputFormat,
    /// Name the program was invoked as
    pub program: String,
}

impl Options {
    pub fn from_cli(cli: Cli, program: impl Into<String>) -> Self {
        Options {
            action: Action::from_cli(&cli),
            color: cli.color,
            format: cli.format,
            program: program.into(),
        }
    }
}

/// Both documents, loaded once per invocation
struct Documents {
    config: Document,
    config_path: PathBuf,
    themes: Document,
}

impl Documents {
    fn load(paths: &ConfigPaths) -> Result<Self> {
        let config_path = paths.config_file();
        let config = Document::load(&config_path)?;
        let themes = Document::load(&paths.themes_file())?;

        Ok(Documents {
            config,
            config_path,
            themes,
        })
    }
}

/// Runs the selected action and returns the process exit code
///
/// `resolve_paths` is only called for actions that read the configuration
/// files.
pub fn run(options: &Options, resolve_paths: impl FnOnce() -> Result<ConfigPaths>) -> i32 {
    exit_code(options, run_inner(options, resolve_paths))
}

/// Maps the outcome of an action to an exit code, reporting fatal errors
fn exit_code(options: &Options, result: Result<()>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(Error::Output(e)) => {
            error!("failed to write output: {}", e);
            EXIT_ERROR
        }
        Err(e) => {
            let color = options.color.for_stream(io::stdout().is_terminal());
            let formatter = HumanFormatter::new(color);
            if let Err(write_error) = formatter.write_error(&e) {
                error!("failed to report error: {}", write_error);
            }
            EXIT_ERROR
        }
    }
}

fn run_inner(
    options: &Options,
    resolve_paths: impl FnOnce() -> Result<ConfigPaths>,
) -> Result<()> {
    debug!(action = ?options.action, "dispatching");

    if !options.action.needs_documents() {
        return write_without_documents(options);
    }

    let paths = resolve_paths()?;
    let mut documents = Documents::load(&paths)?;
    execute(options, &mut documents)
}

/// Runs an action that works on the loaded documents
fn execute(options: &Options, documents: &mut Documents) -> Result<()> {
    let stdout_color = options.color.for_stream(io::stdout().is_terminal());

    match &options.action {
        Action::ListThemes => {
            let names = list_theme_names(&documents.themes);
            match options.format {
                OutputFormat::Human => {
                    HumanFormatter::new(stdout_color).write_theme_list(&names)?
                }
                OutputFormat::Jsonl => {
                    write_stdout(&JsonlFormatter::new().format_theme_list(&names))?
                }
            }
        }
        Action::ShowCurrent => {
            let current = CurrentTheme::from_config(&documents.config);
            match options.format {
                OutputFormat::Human => HumanFormatter::new(stdout_color).write_current(&current)?,
                OutputFormat::Jsonl => {
                    write_stdout(&JsonlFormatter::new().format_current(&current))?
                }
            }
        }
        Action::Apply(theme_name) => {
            // A failed save does not change the exit status
            if let Err(e) = apply_theme_and_save(
                &mut documents.config,
                &documents.themes,
                theme_name,
                &documents.config_path,
            ) {
                warn!("theme not saved: {}", e);
            }
        }
        Action::Help | Action::ShowUsage | Action::ShowVersion => {}
    }

    Ok(())
}

/// Help, usage and version output
fn write_without_documents(options: &Options) -> Result<()> {
    match options.action {
        Action::Help | Action::ShowUsage => {
            let mut stderr = io::stderr();
            stderr.write_all(usage(&options.program).as_bytes())?;
            stderr.flush()?;
        }
        Action::ShowVersion => write_stdout(&format!("{}\n", version_line(&options.program)))?,
        Action::ListThemes | Action::ShowCurrent | Action::Apply(_) => {}
    }

    Ok(())
}

fn write_stdout(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

/// Usage line followed by the flag list
pub fn usage(program: &str) -> String {
    Cli::command()
        .bin_name(program)
        .override_usage(format!("{} [OPTIONS|THEME NAME]", program))
        .render_help()
        .to_string()
}

pub fn version_line(program: &str) -> String {
    format!("{} {}", program, VERSION)
}
