// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a normalized (lower-cased) word as an owned `String`.
pub type Word = String;

/// Represents a borrowed view of a word as a `str`. This is used when ownership is not required.
pub type WordRef = str;

/// The number of occurrences of a word.
///
/// Signed, because tabular sources may hand over zero or negative counts; those are
/// kept in the raw data but never reach the log-log fit.
pub type Frequency = i64;

/// 1-based position of a word when sorted by descending frequency.
pub type Rank = usize;

/// Identifies an analysis, e.g. `name-size-lastModified`.
pub type AnalysisId = String;
