//! Emission of the sorted word lists
//!
//! Each list is written one entry per line, joined by `\n`, with no
//! trailing newline, header or footer. Files are created or overwritten
//! in place: there is no temp-file/rename step, so a failed write leaves
//! a partial file behind and the error is returned at once.

use crate::lexicon::{Partition, RunSummary};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while writing an output resource.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Output file could not be created
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Output file could not be written or flushed
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A destination for named line sequences.
pub trait LineSink {
    /// Write `lines` to the resource `name`, replacing its contents.
    fn write_lines(&mut self, name: &Path, lines: &[String]) -> Result<(), EmitError>;
}

/// Writes plain UTF-8 text files.
///
/// Parent directories are not created.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl LineSink for FileSink {
    fn write_lines(&mut self, name: &Path, lines: &[String]) -> Result<(), EmitError> {
        let file = File::create(name).map_err(|source| EmitError::Create {
            path: name.to_path_buf(),
            source,
        })?;
        let write_err = |source| EmitError::Write {
            path: name.to_path_buf(),
            source,
        };

        let mut out = BufWriter::new(file);
        write_joined(&mut out, lines).map_err(write_err)?;
        out.flush().map_err(write_err)?;
        Ok(())
    }
}

fn write_joined<W: Write>(out: &mut W, lines: &[String]) -> std::io::Result<()> {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.write_all(b"\n")?;
        }
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Where one run writes its lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destinations {
    /// Every file receiving the word list (identical copies)
    pub words: Vec<PathBuf>,
    /// Optional file receiving everything else
    pub other: Option<PathBuf>,
}

/// What a run wrote, for the console summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Files created, word lists first
    pub created: Vec<PathBuf>,
    /// Counts for the run
    pub summary: RunSummary,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let created: Vec<String> = self
            .created
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        writeln!(f, "Created {}", created.join(" "))?;
        write!(f, "{}", self.summary)
    }
}

/// Write the partition to its destinations and report what was written.
///
/// The word list goes to every primary destination. The other list is
/// written only when a secondary destination is configured; it is
/// counted either way. Empty lists produce empty files.
pub fn emit(
    partition: &Partition,
    destinations: &Destinations,
    sink: &mut dyn LineSink,
) -> Result<Report, EmitError> {
    let mut created = Vec::new();

    for path in &destinations.words {
        sink.write_lines(path, partition.words())?;
        info!(path = %path.display(), lines = partition.words().len(), "wrote word list");
        created.push(path.clone());
    }

    if let Some(path) = &destinations.other {
        sink.write_lines(path, partition.other())?;
        info!(path = %path.display(), lines = partition.other().len(), "wrote other list");
        created.push(path.clone());
    }

    Ok(Report {
        created,
        summary: partition.summary().clone(),
    })
}

/// Records writes in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    pub files: std::collections::BTreeMap<PathBuf, String>,
}

#[cfg(test)]
impl LineSink for MemorySink {
    fn write_lines(&mut self, name: &Path, lines: &[String]) -> Result<(), EmitError> {
        let mut buf = Vec::new();
        write_joined(&mut buf, lines).map_err(|source| EmitError::Write {
            path: name.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(buf).unwrap_or_default();
        self.files.insert(name.to_path_buf(), text);
        Ok(())
    }
}
