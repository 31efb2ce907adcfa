//! Case-insensitive collation
//!
//! Entries are ordered by their case-folded text, compared by code point.
//! Folding is the full Unicode default case folding (CaseFolding.txt
//! statuses C and F), so `ß` folds to `ss`, `ᾳ` to `αι` and Cherokee
//! lowercase letters to their uppercase forms. Entries whose folded keys
//! are equal keep their input order.

use caseless::default_case_fold_str;

/// Case-fold an entry into its collation key.
pub fn fold_case(entry: &str) -> String {
    default_case_fold_str(entry)
}

/// Sort entries case-insensitively.
///
/// Stable: entries with equal folded keys stay in input order.
/// Nothing is removed or merged.
pub fn sort_case_insensitive(mut entries: Vec<String>) -> Vec<String> {
    // sort_by_cached_key is stable and folds each entry once
    entries.sort_by_cached_key(|e| fold_case(e));
    entries
}

/// Check that a sequence is non-decreasing under case-insensitive collation.
#[cfg(test)]
pub fn is_collated(entries: &[String]) -> bool {
    entries
        .windows(2)
        .all(|pair| fold_case(&pair[0]) <= fold_case(&pair[1]))
}
