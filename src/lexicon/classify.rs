//! Entry classification
//!
//! An entry is a word when its lower-cased text consists only of the
//! ASCII letters `a` through `z`. Everything else is "other":
//! - Empty entries
//! - Multi-word phrases (spaces, tabs)
//! - Digits
//! - Punctuation (apostrophes, hyphens, underscores, dots...)
//! - Non-ASCII characters that stay non-ASCII after lower-casing

/// Why an entry was not classified as a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RejectReason {
    /// Entry has no characters at all
    Empty,
    /// Entry contains whitespace (usually a multi-word phrase)
    Whitespace,
    /// Entry contains an ASCII digit
    Digit,
    /// Entry contains any other ASCII character outside `a..=z`
    Punctuation,
    /// Entry contains a character outside ASCII after lower-casing
    NonAscii,
}

impl RejectReason {
    /// All reasons, in report order.
    pub const ALL: [RejectReason; 5] = [
        RejectReason::Empty,
        RejectReason::Whitespace,
        RejectReason::Digit,
        RejectReason::Punctuation,
        RejectReason::NonAscii,
    ];

    /// Short label used in logs and reports.
    pub fn label(&self) -> &'static str {
        match self {
            RejectReason::Empty => "empty",
            RejectReason::Whitespace => "whitespace",
            RejectReason::Digit => "digit",
            RejectReason::Punctuation => "punctuation",
            RejectReason::NonAscii => "non-ascii",
        }
    }

    fn of(c: char) -> Self {
        if c.is_whitespace() {
            RejectReason::Whitespace
        } else if c.is_ascii_digit() {
            RejectReason::Digit
        } else if c.is_ascii() {
            RejectReason::Punctuation
        } else {
            RejectReason::NonAscii
        }
    }
}

/// Result of classifying one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Well-formed lowercase-alphabetic word
    Word,
    /// Anything else, with the first offending character class
    Other(RejectReason),
}

impl Classification {
    /// Returns true if the entry is a word
    pub fn is_word(&self) -> bool {
        matches!(self, Classification::Word)
    }
}

/// Classify a single entry.
///
/// Lower-cases the text, then requires every character to lie in
/// `'a'..='z'`. The empty entry is `Other(Empty)`.
pub fn classify(entry: &str) -> Classification {
    if entry.is_empty() {
        return Classification::Other(RejectReason::Empty);
    }

    let lower = entry.to_lowercase();
    match lower.chars().find(|c| !c.is_ascii_lowercase()) {
        None => Classification::Word,
        Some(c) => Classification::Other(RejectReason::of(c)),
    }
}

/// Convenience predicate over [`classify`].
#[cfg(test)]
pub fn is_word(entry: &str) -> bool {
    classify(entry).is_word()
}
