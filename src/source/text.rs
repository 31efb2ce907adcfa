//! Word list source: one entry per line
//!
//! Line terminators (`\n` or `\r\n`) are stripped and nothing else is
//! trimmed, so blank lines inside the file are kept as (empty) entries.
//! A final terminator does not produce a trailing empty entry.

use super::{EntrySource, SourceError};
use std::io::Read;
use std::path::{Path, PathBuf};

const STDIN_NAME: &str = "<stdin>";

#[derive(Debug, Clone)]
enum Input {
    Stdin,
    File(PathBuf),
}

/// A plain-text word list read from a file or stdin.
#[derive(Debug, Clone)]
pub struct LineSource {
    input: Input,
    name: String,
}

impl LineSource {
    /// Read entries from a file.
    pub fn file(path: PathBuf) -> Self {
        let name = path.display().to_string();
        Self {
            input: Input::File(path),
            name,
        }
    }

    /// Read entries from standard input.
    pub fn stdin() -> Self {
        Self {
            input: Input::Stdin,
            name: STDIN_NAME.to_string(),
        }
    }
}

impl EntrySource for LineSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&mut self) -> Result<Vec<String>, SourceError> {
        match &self.input {
            Input::Stdin => read_entries(std::io::stdin().lock(), Path::new(STDIN_NAME)),
            Input::File(path) => {
                let file = std::fs::File::open(path).map_err(|source| SourceError::Read {
                    path: path.clone(),
                    source,
                })?;
                read_entries(file, path)
            }
        }
    }
}

/// Read a whole word list and split it into entries.
///
/// `origin` only labels errors.
pub fn read_entries<R: Read>(mut reader: R, origin: &Path) -> Result<Vec<String>, SourceError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| SourceError::Read {
            path: origin.to_path_buf(),
            source,
        })?;

    let text = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        SourceError::InvalidUtf8 {
            path: origin.to_path_buf(),
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
        }
    })?;

    Ok(text.lines().map(str::to_string).collect())
}
