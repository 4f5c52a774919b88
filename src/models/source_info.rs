use serde::{Deserialize, Serialize};

/// Descriptive metadata about where a set of word counts came from.
///
/// `word_count` and `unique_word_count` are informational only; they never feed
/// into the statistics.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceInfo {
    pub name: String,
    pub media_type: String,
    pub size_bytes: u64,
    pub word_count: Option<usize>,
    pub unique_word_count: Option<usize>,
}

impl SourceInfo {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size_bytes,
            word_count: None,
            unique_word_count: None,
        }
    }

    pub fn with_word_counts(mut self, word_count: usize, unique_word_count: usize) -> Self {
        self.word_count = Some(word_count);
        self.unique_word_count = Some(unique_word_count);
        self
    }
}

/// Builds the `name-size-lastModified` identifier used to key analyses of a file.
///
/// # Example
/// ```
/// use zipf_analyzer::make_analysis_id;
///
/// assert_eq!(make_analysis_id("essay.txt", 2048, 1700000000000), "essay.txt-2048-1700000000000");
/// ```
pub fn make_analysis_id(name: &str, size_bytes: u64, last_modified_millis: u64) -> String {
    format!("{}-{}-{}", name, size_bytes, last_modified_millis)
}
