use std::collections::HashMap;
use std::{fs, path::Path};
use zipf_analyzer::{Frequency, TextAggregation, TextAggregator, Word, WordCount};
pub mod constants;

/// Asserts that two floats are within `tolerance` of each other.
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}

/// Generates word counts which follow Zipf's Law exactly: `count = max_frequency / rank`.
///
/// Counts are rounded to the nearest integer, so the law only holds exactly when
/// `max_frequency` is divisible by every rank (e.g. 2520 for 10 words).
pub fn generate_zipf_word_counts(max_frequency: Frequency, total_words: usize) -> Vec<WordCount> {
    (1..=total_words)
        .map(|rank| {
            WordCount::new(
                format!("word{:04}", rank),
                (max_frequency as f64 / rank as f64).round() as Frequency,
            )
        })
        .collect()
}

/// Looks up word counts by word.
pub fn to_frequency_map(word_counts: &[WordCount]) -> HashMap<Word, Frequency> {
    word_counts
        .iter()
        .map(|word_count| (word_count.word.clone(), word_count.count))
        .collect()
}

// Helper function to get the expected word counts from the text file
pub fn get_expected_word_counts(file_path: &Path) -> Vec<(Word, Frequency)> {
    // Read the content of the text file
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    // Extract `word=count` pairs from lines starting with EXPECTED:
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let expected = line.strip_prefix("EXPECTED:")?.trim();
            let (word, count) = expected.rsplit_once('=')?;

            Some((
                word.trim().to_string(),
                count.trim().parse().expect("Invalid EXPECTED count"),
            ))
        })
        .collect()
}

// Helper function to read the expected unique word count, if the file declares one
pub fn get_expected_unique_word_count(file_path: &Path) -> Option<usize> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content.lines().find_map(|line| {
        line.trim()
            .strip_prefix("EXPECTED_UNIQUE:")
            .map(|count| count.trim().parse().expect("Invalid EXPECTED_UNIQUE count"))
    })
}

// Helper function to run the aggregation for a fixture file and check its expectations
pub fn run_test_for_file(test_file_path: &Path) -> TextAggregation {
    // Read the content of the text file
    let raw_text = fs::read_to_string(test_file_path).expect("Failed to read test file");

    // Filter out lines starting with 'EXPECTED:', 'EXPECTED_UNIQUE:', or 'COMMENT:'
    let filtered_text: String = raw_text
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("EXPECTED:")
                && !line.trim_start().starts_with("EXPECTED_UNIQUE:")
                && !line.trim_start().starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n");

    let aggregation = TextAggregator::new().aggregate(&filtered_text);
    let frequency_map = to_frequency_map(&aggregation.word_counts);

    for (word, expected_count) in get_expected_word_counts(test_file_path) {
        assert_eq!(
            frequency_map.get(&word),
            Some(&expected_count),
            "{} - Unexpected count for {:?}. Found: {:?}",
            test_file_path.display(),
            word,
            frequency_map
        );
    }

    if let Some(expected_unique) = get_expected_unique_word_count(test_file_path) {
        assert_eq!(
            aggregation.unique_word_count,
            expected_unique,
            "{} - Expected {} unique words but found {}: {:?}",
            test_file_path.display(),
            expected_unique,
            aggregation.unique_word_count,
            frequency_map
        );
    }

    aggregation
}
