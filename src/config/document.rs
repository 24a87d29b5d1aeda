#![forbid(unsafe_code)]

//! In-memory INI document
//!
//! The dialect matches what xfce4-terminal writes: `[Section]` headers,
//! `key=value` lines and full-line `#`/`;` comments. A `#` or `;` after a
//! value is part of the value, so colors like `#dcdcdc` and `;`-separated
//! palettes are kept intact.
//!
//! Documents are loaded whole and written back whole.

use crate::error::{ParseError, StoreError};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Name of the implicit section holding keys that precede any header
pub const DEFAULT_SECTION: &str = "DEFAULT";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Comment(String),
    Entry { key: String, value: String },
}

/// A named group of key/value pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    lines: Vec<Line>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Returns the value for `key`, or an empty string when it is absent
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    /// Inserts `key` or overwrites its value in place
    pub fn set(&mut self, key: &str, value: &str) {
        for line in &mut self.lines {
            if let Line::Entry { key: k, value: v } = line
                && *k == key
            {
                value.clone_into(v);
                return;
            }
        }

        self.lines.push(Line::Entry {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    /// Key/value pairs in file order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lines.iter().filter_map(|line| match line {
            Line::Entry { key, value } => Some((key.as_str(), value.as_str())),
            Line::Comment(_) => None,
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries().map(|(key, _)| key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered collection of sections
///
/// The default section always exists and always comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document holding only the empty default section
    pub fn new() -> Self {
        Document {
            sections: vec![Section::new(DEFAULT_SECTION)],
        }
    }

    /// Reads and parses the file at `path`
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let text = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::parse(&text).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            path = %path.display(),
            sections = document.sections.len(),
            "loaded document"
        );
        Ok(document)
    }

    /// Parses INI text
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut document = Document::new();
        let mut current = 0;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();

            if line.is_empty() {
                continue;
            }

            if line.starts_with('#') || line.starts_with(';') {
                document.sections[current]
                    .lines
                    .push(Line::Comment(line.to_string()));
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let end = rest
                    .find(']')
                    .ok_or(ParseError::UnclosedSection { line: line_no })?;
                let name = rest[..end].trim();
                if name.is_empty() {
                    return Err(ParseError::EmptySectionName { line: line_no });
                }
                current = document.section_index(name);
                continue;
            }

            let delimiter = line
                .find(['=', ':'])
                .ok_or_else(|| ParseError::MissingDelimiter {
                    line: line_no,
                    content: line.to_string(),
                })?;
            let key = line[..delimiter].trim();
            let value = line[delimiter + 1..].trim();
            if key.is_empty() {
                return Err(ParseError::EmptyKey { line: line_no });
            }

            document.sections[current].set(key, value);
        }

        Ok(document)
    }

    /// Section names in file order, the default section included
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(Section::name)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Returns the named section, creating an empty one if absent
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        let index = self.section_index(name);
        &mut self.sections[index]
    }

    fn section_index(&mut self, name: &str) -> usize {
        match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        }
    }

    /// Serializes the whole document
    pub fn to_ini_string(&self) -> String {
        let mut output = String::new();

        for section in &self.sections {
            if section.name == DEFAULT_SECTION {
                // Only keys that preceded every header live here
                if section.lines.is_empty() {
                    continue;
                }
            } else {
                if !output.is_empty() {
                    output.push('\n');
                }
                output.push_str(&format!("[{}]\n", section.name));
            }

            for line in &section.lines {
                match line {
                    Line::Comment(text) => output.push_str(text),
                    Line::Entry { key, value } => {
                        output.push_str(key);
                        output.push('=');
                        output.push_str(value);
                    }
                }
                output.push('\n');
            }
        }

        output
    }

    /// Writes the document to `path`, replacing the previous content
    ///
    /// The text goes to a temporary file next to `path` first, which is then
    /// renamed over it. An existing file keeps its permissions.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let write_error = |source: std::io::Error| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
        file.write_all(self.to_ini_string().as_bytes())
            .map_err(write_error)?;

        if let Ok(metadata) = fs::metadata(path) {
            file.as_file()
                .set_permissions(metadata.permissions())
                .map_err(write_error)?;
        }

        file.persist(path).map_err(|e| write_error(e.error))?;

        debug!(path = %path.display(), "saved document");
        Ok(())
    }
}
