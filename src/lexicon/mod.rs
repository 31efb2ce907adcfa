//! Lexicon logic: classification, collation, partitioning
//!
//! An entry is a raw lemma or word form as supplied by a source. It has
//! no identity beyond its text and is never deduplicated or normalized.

pub mod classify;
pub mod collate;
pub mod partition;

pub use partition::{partition, Partition, RunSummary};
