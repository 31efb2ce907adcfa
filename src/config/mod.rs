//! Job configuration
//!
//! A job names one source and where its lists go. Jobs come either from
//! command-line flags (a single job) or from a TOML manifest:
//!
//! ```toml
//! [[job]]
//! name = "wordnet"
//! source = "sqlite:wordnet.db#words.lemma"
//! words = ["dictionary.txt", "wordnet.txt"]
//! other = "othernet.txt"
//!
//! [[job]]
//! source = "/usr/share/dict/words"
//! words = ["words"]
//! ```

use crate::output::Destinations;
use crate::source::SourceSpec;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building the job list.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Manifest file could not be read
    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Manifest is not valid TOML or does not match the job schema
    #[error("invalid manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Manifest lists no jobs
    #[error("manifest {0} defines no jobs")]
    NoJobs(PathBuf),
    /// Job has no word list destination
    #[error("job {0:?} has no word list destination")]
    NoDestination(String),
    /// More than one job reads stdin, which can only be consumed once
    #[error("manifest {path} reads stdin in {count} jobs, at most one may")]
    StdinReused { path: PathBuf, count: usize },
}

/// One source, one set of destinations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    /// Name used in logs; defaults to the source spec
    #[serde(default)]
    pub name: Option<String>,
    /// Where entries come from
    pub source: SourceSpec,
    /// Files receiving the word list
    pub words: Vec<PathBuf>,
    /// File receiving everything else
    #[serde(default)]
    pub other: Option<PathBuf>,
}

impl Job {
    /// Build a job from command-line values.
    pub fn new(source: SourceSpec, words: Vec<PathBuf>, other: Option<PathBuf>) -> Self {
        Job {
            name: None,
            source,
            words,
            other,
        }
    }

    /// Name for logs and errors.
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.source.to_string())
    }

    /// Where this job writes.
    pub fn destinations(&self) -> Destinations {
        Destinations {
            words: self.words.clone(),
            other: self.other.clone(),
        }
    }

    /// Check the job can run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.words.is_empty() {
            return Err(ConfigError::NoDestination(self.label()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(default, rename = "job")]
    jobs: Vec<Job>,
}

/// Parse a manifest from TOML text.
pub fn parse_manifest(text: &str, path: &Path) -> Result<Vec<Job>, ConfigError> {
    let manifest: Manifest = toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if manifest.jobs.is_empty() {
        return Err(ConfigError::NoJobs(path.to_path_buf()));
    }
    for job in &manifest.jobs {
        job.validate()?;
    }

    let stdin_jobs = manifest
        .jobs
        .iter()
        .filter(|job| job.source == SourceSpec::Stdin)
        .count();
    if stdin_jobs > 1 {
        return Err(ConfigError::StdinReused {
            path: path.to_path_buf(),
            count: stdin_jobs,
        });
    }

    Ok(manifest.jobs)
}

/// Read and parse a manifest file.
pub fn load_manifest(path: &Path) -> Result<Vec<Job>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&text, path)
}
