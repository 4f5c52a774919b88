use std::fs;
use std::path::Path;
use test_utils::constants::TEST_FILES_DIRECTORY;
use test_utils::{run_test_for_file, to_frequency_map};
use zipf_analyzer::{TextAggregator, WordCount};

#[cfg(test)]
mod text_aggregator_tests {
    use super::*;

    #[test]
    fn test_aggregate_example_sentence() {
        let aggregation = TextAggregator::new().aggregate("The cat sat on the mat. The CAT ran!");

        assert_eq!(
            aggregation.word_counts,
            vec![
                WordCount::new("the", 3),
                WordCount::new("cat", 2),
                WordCount::new("sat", 1),
                WordCount::new("on", 1),
                WordCount::new("mat", 1),
                WordCount::new("ran", 1),
            ]
        );
        assert_eq!(aggregation.unique_word_count, 6);
        assert_eq!(aggregation.total_word_count, 9);
    }

    #[test]
    fn test_total_word_count_is_whitespace_based() {
        // "--" and "42" are counted as words by the whitespace split only
        let aggregation = TextAggregator::new().aggregate("one -- two 42 three");

        assert_eq!(aggregation.total_word_count, 5);
        assert_eq!(aggregation.unique_word_count, 3);
    }

    #[test]
    fn test_aggregate_empty_text() {
        let aggregation = TextAggregator::new().aggregate("");

        assert!(aggregation.word_counts.is_empty());
        assert_eq!(aggregation.total_word_count, 0);
        assert_eq!(aggregation.unique_word_count, 0);
    }

    #[test]
    fn test_frequency_map_matches_word_counts() {
        let aggregation = TextAggregator::new().aggregate("b a b c b a");
        let frequency_map = to_frequency_map(&aggregation.word_counts);

        assert_eq!(frequency_map.len(), 3);
        assert_eq!(frequency_map["b"], 3);
        assert_eq!(frequency_map["a"], 2);
        assert_eq!(frequency_map["c"], 1);
    }

    #[test]
    fn test_fixture_files() {
        let mut fixture_paths: Vec<_> = fs::read_dir(Path::new(TEST_FILES_DIRECTORY))
            .expect("Failed to read test files directory")
            .map(|entry| entry.expect("Failed to read directory entry").path())
            .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
            .collect();
        fixture_paths.sort();

        assert!(!fixture_paths.is_empty(), "No fixture files found");

        for path in fixture_paths {
            let aggregation = run_test_for_file(&path);
            assert_eq!(aggregation.unique_word_count, aggregation.word_counts.len());
        }
    }
}
