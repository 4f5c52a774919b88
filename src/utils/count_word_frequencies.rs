use crate::models::WordCount;
use crate::types::{Word, WordRef};
use std::collections::HashMap;

/// Counts the occurrences of each word in the given list.
///
/// # Arguments
/// * `words` - A slice of already-normalized words.
///
/// # Returns
/// * One `WordCount` per unique word, in order of first occurrence.
///
/// # Example
/// ```
/// use zipf_analyzer::count_word_frequencies;
///
/// let words = vec!["the".to_string(), "cat".to_string(), "the".to_string()];
/// let word_counts = count_word_frequencies(&words);
/// assert_eq!(word_counts[0].word, "the");
/// assert_eq!(word_counts[0].count, 2);
/// assert_eq!(word_counts[1].word, "cat");
/// assert_eq!(word_counts[1].count, 1);
/// ```
pub fn count_word_frequencies(words: &[Word]) -> Vec<WordCount> {
    let mut positions: HashMap<&WordRef, usize> = HashMap::new();
    let mut word_counts: Vec<WordCount> = Vec::new();

    for word in words {
        match positions.get(word.as_str()) {
            Some(&position) => word_counts[position].count += 1,
            None => {
                positions.insert(word.as_str(), word_counts.len());
                word_counts.push(WordCount::new(word.clone(), 1));
            }
        }
    }

    word_counts
}
