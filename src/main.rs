#![forbid(unsafe_code)]

use clap::Parser;
use tracing_subscriber::EnvFilter;
use xfce4_terminal_themes::cli::{self, Cli, Options};
use xfce4_terminal_themes::config::ConfigPaths;

fn main() {
    // Level is overridden by `RUST_LOG`. Logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    // argv[0] need not be UTF-8
    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    let options = Options::from_cli(args, program);

    std::process::exit(cli::run(&options, ConfigPaths::from_env));
}
