#![forbid(unsafe_code)]

//! Error types shared across the crate

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Syntax errors found while parsing INI text
///
/// Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A `[` header line without its closing `]`
    #[error("line {line}: unclosed section header")]
    UnclosedSection { line: usize },

    /// A `[]` header
    #[error("line {line}: empty section name")]
    EmptySectionName { line: usize },

    /// A non-comment line with neither `=` nor `:`
    #[error("line {line}: key-value delimiter not found: {content}")]
    MissingDelimiter { line: usize, content: String },

    /// A line such as `=value`
    #[error("line {line}: empty key name")]
    EmptyKey { line: usize },
}

/// Errors raised while loading or saving a configuration document
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("open {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Top-level errors that abort the program
#[derive(Debug, Error)]
pub enum Error {
    /// Neither `XDG_HOME` nor a home directory could be determined
    #[error("cannot determine the configuration directory: XDG_HOME and HOME are unset")]
    ConfigDirUnavailable,

    #[error(transparent)]
    Load(#[from] StoreError),

    /// Writing to stdout or stderr failed
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
