//! Entry sources
//!
//! A source produces the full list of raw entries for one run. Sources
//! are constructed once by the caller and handed to the pipeline; there
//! is no process-wide corpus cache.
//!
//! Shipped sources:
//! - [`LineSource`]: a word list file (or stdin), one entry per line
//! - [`SqliteSource`]: one text column of a SQLite lexical database
//! - [`StaticSource`]: an in-memory list (tests)

pub mod sqlite;
pub mod text;

pub use sqlite::SqliteSource;
pub use text::LineSource;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while fetching entries. All of them are fatal for a run.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Word list could not be opened or read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Word list is not valid UTF-8
    #[error("{path}: invalid UTF-8 on line {line}")]
    InvalidUtf8 { path: PathBuf, line: usize },
    /// SQLite database file does not exist
    #[error("database not found: {0}")]
    MissingDatabase(PathBuf),
    /// Database error from SQLite
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// Table or column name is not a plain identifier
    #[error("invalid SQL identifier {0:?}")]
    InvalidIdentifier(String),
    /// Could not determine data directory
    #[error("could not determine data directory")]
    NoDataDirectory,
    /// Source spec string could not be parsed
    #[error("invalid source spec {spec:?}: {reason}")]
    InvalidSpec { spec: String, reason: String },
}

/// A producer of raw entries.
pub trait EntrySource {
    /// Human-readable name of this source (for logging/reports).
    fn name(&self) -> &str;

    /// Produce every entry, in source order.
    fn fetch(&mut self) -> Result<Vec<String>, SourceError>;
}

/// Entries held in memory.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    entries: Vec<String>,
}

#[cfg(test)]
impl StaticSource {
    pub fn new(name: impl Into<String>, entries: Vec<String>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }
}

#[cfg(test)]
impl EntrySource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&mut self) -> Result<Vec<String>, SourceError> {
        Ok(self.entries.clone())
    }
}

/// Where entries come from, as written on the command line or in a manifest.
///
/// - `-` reads a word list from stdin
/// - `PATH` or `text:PATH` reads a word list file
/// - `sqlite:PATH`, `sqlite:PATH#table.column`, `sqlite:` (default database)
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum SourceSpec {
    Stdin,
    Text(PathBuf),
    Sqlite {
        path: Option<PathBuf>,
        table: String,
        column: String,
    },
}

impl SourceSpec {
    /// Build the source this spec describes.
    pub fn open(&self) -> Result<Box<dyn EntrySource>, SourceError> {
        Ok(match self {
            SourceSpec::Stdin => Box::new(LineSource::stdin()),
            SourceSpec::Text(path) => Box::new(LineSource::file(path.clone())),
            SourceSpec::Sqlite {
                path,
                table,
                column,
            } => {
                let path = match path {
                    Some(path) => path.clone(),
                    None => SqliteSource::default_path()?,
                };
                Box::new(SqliteSource::new(path, table, column)?)
            }
        })
    }
}

impl FromStr for SourceSpec {
    type Err = SourceError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| SourceError::InvalidSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        if spec == "-" {
            return Ok(SourceSpec::Stdin);
        }

        if let Some(rest) = spec.strip_prefix("sqlite:") {
            let (path, selector) = match rest.split_once('#') {
                Some((path, selector)) => (path, Some(selector)),
                None => (rest, None),
            };
            let (table, column) = match selector {
                Some(selector) => selector
                    .split_once('.')
                    .ok_or_else(|| invalid("expected #table.column"))?,
                None => (sqlite::DEFAULT_TABLE, sqlite::DEFAULT_COLUMN),
            };
            sqlite::check_identifier(table)?;
            sqlite::check_identifier(column)?;
            return Ok(SourceSpec::Sqlite {
                path: (!path.is_empty()).then(|| PathBuf::from(path)),
                table: table.to_string(),
                column: column.to_string(),
            });
        }

        let path = spec.strip_prefix("text:").unwrap_or(spec);
        if path.is_empty() {
            return Err(invalid("empty path"));
        }
        Ok(SourceSpec::Text(PathBuf::from(path)))
    }
}

impl TryFrom<String> for SourceSpec {
    type Error = SourceError;

    fn try_from(spec: String) -> Result<Self, Self::Error> {
        spec.parse()
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSpec::Stdin => write!(f, "-"),
            SourceSpec::Text(path) => {
                let path = path.display().to_string();
                // a bare path must not read back as another spec
                if path == "-" || path.starts_with("sqlite:") || path.starts_with("text:") {
                    write!(f, "text:{}", path)
                } else {
                    write!(f, "{}", path)
                }
            }
            SourceSpec::Sqlite {
                path,
                table,
                column,
            } => {
                let path = path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                write!(f, "sqlite:{}#{}.{}", path, table, column)
            }
        }
    }
}
