//! SQLite lexical database source (rusqlite)
//!
//! Reads one text column of one table, in `rowid` order, skipping NULLs.
//! A WordNet SQLite export stores its lemmas in `words.lemma`, which is
//! the default selection.
//!
//! The database is opened read-only; a missing file is an error rather
//! than a fresh empty database.

use super::{EntrySource, SourceError};
use directories::ProjectDirs;
use rusqlite::{Connection, OpenFlags};
use std::path::PathBuf;

/// Table read when none is given
pub const DEFAULT_TABLE: &str = "words";

/// Column read when none is given
pub const DEFAULT_COLUMN: &str = "lemma";

/// File name of the default database inside the data directory
pub const DEFAULT_DATABASE: &str = "wordnet.db";

/// Reject anything that is not `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Table and column names are interpolated into the query, so only
/// plain identifiers are accepted.
pub fn check_identifier(ident: &str) -> Result<(), SourceError> {
    let mut chars = ident.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(SourceError::InvalidIdentifier(ident.to_string()))
    }
}

/// Entries read from a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteSource {
    path: PathBuf,
    table: String,
    column: String,
    name: String,
}

impl SqliteSource {
    /// Create a source reading `table.column` from the database at `path`.
    pub fn new(path: PathBuf, table: &str, column: &str) -> Result<Self, SourceError> {
        check_identifier(table)?;
        check_identifier(column)?;
        let name = format!("{}#{}.{}", path.display(), table, column);
        Ok(Self {
            path,
            table: table.to_string(),
            column: column.to_string(),
            name,
        })
    }

    /// Get the default database location.
    ///
    /// Uses OS-standard directories:
    /// - Linux: `$XDG_DATA_HOME/lexsieve/wordnet.db` or `~/.local/share/lexsieve/wordnet.db`
    /// - macOS: `~/Library/Application Support/lexsieve/wordnet.db`
    pub fn default_path() -> Result<PathBuf, SourceError> {
        ProjectDirs::from("", "", "lexsieve")
            .map(|dirs| dirs.data_dir().join(DEFAULT_DATABASE))
            .ok_or(SourceError::NoDataDirectory)
    }

    fn open(&self) -> Result<Connection, SourceError> {
        if !self.path.is_file() {
            return Err(SourceError::MissingDatabase(self.path.clone()));
        }
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(conn)
    }
}

impl EntrySource for SqliteSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&mut self) -> Result<Vec<String>, SourceError> {
        let conn = self.open()?;
        let sql = format!(
            "SELECT \"{col}\" FROM \"{table}\" WHERE \"{col}\" IS NOT NULL ORDER BY rowid",
            col = self.column,
            table = self.table,
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }
}
