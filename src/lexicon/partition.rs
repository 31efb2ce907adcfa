//! Partitioning entries into words and other
//!
//! Every entry lands on exactly one side. Each side is then sorted
//! case-insensitively, and the counts are kept in a [`RunSummary`].

use super::classify::{classify, Classification, RejectReason};
use super::collate::sort_case_insensitive;
use std::collections::BTreeMap;
use std::fmt;

/// Counts for one run.
///
/// `total == words + other` always holds, and the reject breakdown
/// sums to `other`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries seen
    pub total: usize,
    /// Entries classified as words
    pub words: usize,
    /// Entries classified as other
    pub other: usize,
    /// Other entries by reject reason
    pub rejects: BTreeMap<RejectReason, usize>,
}

impl RunSummary {
    fn record(&mut self, classification: Classification) {
        self.total += 1;
        match classification {
            Classification::Word => self.words += 1,
            Classification::Other(reason) => {
                self.other += 1;
                *self.rejects.entry(reason).or_insert(0) += 1;
            }
        }
    }

    /// Count of other entries rejected for a given reason.
    pub fn rejected_for(&self, reason: RejectReason) -> usize {
        self.rejects.get(&reason).copied().unwrap_or(0)
    }

    /// One-line reject breakdown, e.g. `whitespace=3 digit=1`.
    pub fn reject_breakdown(&self) -> String {
        RejectReason::ALL
            .iter()
            .filter_map(|reason| {
                let count = self.rejected_for(*reason);
                (count > 0).then(|| format!("{}={}", reason.label(), count))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {}. Words: {}. Other: {}.",
            self.total, self.words, self.other
        )
    }
}

/// The two sorted sides of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    words: Vec<String>,
    other: Vec<String>,
    summary: RunSummary,
}

impl Partition {
    /// Sorted well-formed words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Sorted everything else.
    pub fn other(&self) -> &[String] {
        &self.other
    }

    /// Counts for this partition.
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }
}

/// Split entries into words and other, preserving input order on each side.
///
/// Nothing is dropped or deduplicated.
pub fn split(entries: Vec<String>) -> (Vec<String>, Vec<String>, RunSummary) {
    let mut words = Vec::new();
    let mut other = Vec::new();
    let mut summary = RunSummary::default();

    for entry in entries {
        let classification = classify(&entry);
        summary.record(classification);
        if classification.is_word() {
            words.push(entry);
        } else {
            other.push(entry);
        }
    }

    (words, other, summary)
}

/// Classify every entry, split, and sort each side case-insensitively.
pub fn partition(entries: Vec<String>) -> Partition {
    let (words, other, summary) = split(entries);
    Partition {
        words: sort_case_insensitive(words),
        other: sort_case_insensitive(other),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::collate::{fold_case, is_collated};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_entries() -> Vec<String> {
        strings(&[
            "dog", "Dog", "ice cream", "o'clock", "42", "", "naïve", "Zebra", "apple", "APPLE",
            "x-ray", "dog", "Kelvin", "a_priori", "catch22", "Straße", "ant",
        ])
    }

    fn distinct_entries() -> Vec<String> {
        strings(&[
            "dog", "Dog", "DOG", "ice cream", "Ice Cream", "42", "", "Zebra", "apple", "APPLE",
            "Apple", "x-ray", "X-Ray", "Straße", "strasse", "ant",
        ])
    }

    #[test]
    fn test_reference_example() {
        let p = partition(strings(&["Apple", "apple", "rock-climbing", "42", "Zebra"]));
        assert_eq!(p.words(), strings(&["Apple", "apple", "Zebra"]).as_slice());
        assert_eq!(p.other(), strings(&["42", "rock-climbing"]).as_slice());
        assert_eq!(p.summary().total, 5);
        assert_eq!(p.summary().words, 3);
        assert_eq!(p.summary().other, 2);
    }

    #[test]
    fn test_empty_input() {
        let p = partition(Vec::new());
        assert!(p.words().is_empty());
        assert!(p.other().is_empty());
        assert_eq!(p.summary(), &RunSummary::default());
        assert_eq!(p.summary().to_string(), "Total: 0. Words: 0. Other: 0.");
    }

    #[test]
    fn test_empty_entries_are_kept_as_other() {
        let p = partition(strings(&["", "word", ""]));
        assert_eq!(p.words(), strings(&["word"]).as_slice());
        assert_eq!(p.other(), strings(&["", ""]).as_slice());
        assert_eq!(p.summary().rejected_for(RejectReason::Empty), 2);
    }

    #[test]
    fn test_split_preserves_input_order() {
        let (words, other, _) = split(strings(&["b", "1", "a", "0"]));
        assert_eq!(words, strings(&["b", "a"]));
        assert_eq!(other, strings(&["1", "0"]));
    }

    #[test]
    fn test_partition_is_total_and_exclusive() {
        let input = sample_entries();
        let p = partition(input.clone());

        assert_eq!(p.summary().total, input.len());
        assert_eq!(p.words().len() + p.other().len(), input.len());
        assert_eq!(p.summary().words, p.words().len());
        assert_eq!(p.summary().other, p.other().len());

        // multiset equality: nothing dropped, nothing duplicated
        let mut expected = input;
        expected.sort();
        let mut actual: Vec<String> = p.words().iter().chain(p.other()).cloned().collect();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_sides_match_classifier() {
        let p = partition(sample_entries());
        assert!(p.words().iter().all(|w| classify(w).is_word()));
        assert!(p.other().iter().all(|o| !classify(o).is_word()));
    }

    #[test]
    fn test_duplicates_survive() {
        let p = partition(sample_entries());
        let dogs = p.words().iter().filter(|w| w.as_str() == "dog").count();
        assert_eq!(dogs, 2);
    }

    #[test]
    fn test_shuffled_inputs_stay_collated_and_stable() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut input = distinct_entries();
            input.shuffle(&mut rng);
            let p = partition(input.clone());

            assert!(is_collated(p.words()));
            assert!(is_collated(p.other()));

            // equal folded keys keep their relative input order
            for side in [p.words(), p.other()] {
                for pair in side.windows(2) {
                    if fold_case(&pair[0]) == fold_case(&pair[1]) && pair[0] != pair[1] {
                        let first = input.iter().position(|e| e == &pair[0]);
                        let second = input.iter().position(|e| e == &pair[1]);
                        assert!(first < second, "{:?} before {:?}", pair[0], pair[1]);
                    }
                }
            }
        }
    }

    #[test]
    fn test_partition_is_deterministic() {
        assert_eq!(partition(sample_entries()), partition(sample_entries()));
    }

    #[test]
    fn test_reject_breakdown() {
        let p = partition(strings(&["ice cream", "42", "x-ray", "y-axis", "naïve", ""]));
        let summary = p.summary();
        assert_eq!(summary.rejected_for(RejectReason::Whitespace), 1);
        assert_eq!(summary.rejected_for(RejectReason::Digit), 1);
        assert_eq!(summary.rejected_for(RejectReason::Punctuation), 2);
        assert_eq!(summary.rejected_for(RejectReason::NonAscii), 1);
        assert_eq!(summary.rejected_for(RejectReason::Empty), 1);
        assert_eq!(summary.rejects.values().sum::<usize>(), summary.other);
        assert_eq!(
            summary.reject_breakdown(),
            "empty=1 whitespace=1 digit=1 punctuation=2 non-ascii=1"
        );
    }
}
