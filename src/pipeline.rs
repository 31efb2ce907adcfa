//! One job end to end: fetch, partition, emit
//!
//! Every entry is fetched and classified before anything is written, so a
//! source failure never leaves output behind. Write failures stop the job
//! immediately.

use crate::config::Job;
use crate::lexicon::partition;
use crate::output::{emit, Destinations, EmitError, LineSink, Report};
use crate::source::{EntrySource, SourceError};
use thiserror::Error;
use tracing::{debug, info};

/// A job failed at one of its external boundaries.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Entries could not be fetched
    #[error("job {job:?}: source unavailable")]
    Source {
        job: String,
        #[source]
        source: SourceError,
    },
    /// An output resource could not be written
    #[error("job {job:?}: write failed")]
    Emit {
        job: String,
        #[source]
        source: EmitError,
    },
}

/// Run a configured job, opening its source first.
pub fn run_job(job: &Job, sink: &mut dyn LineSink) -> Result<Report, PipelineError> {
    let label = job.label();
    let mut source = job.source.open().map_err(|source| PipelineError::Source {
        job: label.clone(),
        source,
    })?;
    run(&label, source.as_mut(), &job.destinations(), sink)
}

/// Fetch from `source`, partition, and write to `destinations`.
pub fn run(
    label: &str,
    source: &mut dyn EntrySource,
    destinations: &Destinations,
    sink: &mut dyn LineSink,
) -> Result<Report, PipelineError> {
    let entries = source.fetch().map_err(|e| PipelineError::Source {
        job: label.to_string(),
        source: e,
    })?;
    info!(job = label, source = source.name(), entries = entries.len(), "fetched entries");

    let partition = partition(entries);
    let summary = partition.summary();
    info!(
        job = label,
        words = summary.words,
        other = summary.other,
        "partitioned entries"
    );
    debug!(job = label, rejects = %summary.reject_breakdown(), "reject breakdown");

    emit(&partition, destinations, sink).map_err(|e| PipelineError::Emit {
        job: label.to_string(),
        source: e,
    })
}
