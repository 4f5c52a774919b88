use crate::models::WordCount;

/// Sorts word counts into rank order.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by count in descending order (higher count first).
/// - **Secondary:** If two words have the same count, sorts by word in
///   ascending lexicographical order for deterministic ordering.
///
/// The input is left untouched; a sorted copy is returned.
///
/// ### Example:
/// ```rust
/// use zipf_analyzer::{sort_word_counts, WordCount};
///
/// let word_counts = vec![
///     WordCount::new("cat", 10),
///     WordCount::new("the", 15),
///     WordCount::new("and", 10),
/// ];
///
/// let sorted = sort_word_counts(&word_counts);
/// assert_eq!(sorted, vec![
///     WordCount::new("the", 15),
///     WordCount::new("and", 10),
///     WordCount::new("cat", 10),
/// ]);
/// ```
pub fn sort_word_counts(word_counts: &[WordCount]) -> Vec<WordCount> {
    let mut sorted_word_counts = word_counts.to_vec();

    sorted_word_counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count) // Sort by count (descending)
            .then_with(|| a.word.cmp(&b.word)) // Secondary sort by word (ascending)
    });

    sorted_word_counts
}
