#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_ZIPF_ANALYZER_CONFIG;
mod constants;
pub use constants::DEFAULT_TOP_N_WORDS;
pub mod models;
pub use models::{
    make_analysis_id, AnalysisResult, CsvTableReader, DocumentIngestor, Error, FitMetrics,
    IngestedDocument, PlainTextExtractor, RankedPoint, SourceInfo, TableReader, TextAggregation,
    TextAggregator, TextExtractor, Tokenizer, WordCount, ZipfAnalyzer, ZipfAnalyzerConfig,
};
pub mod types;
mod utils;
pub use types::{AnalysisId, Frequency, Rank, Word, WordRef};
pub use utils::{
    count_word_frequencies, linear_regression, sort_word_counts, write_ranked_points_csv,
};

/// Analyzes a list of `(word, count)` pairs using the default configuration.
///
/// # Example
/// ```
/// use zipf_analyzer::{analyze_word_counts, SourceInfo, WordCount};
///
/// let word_counts = vec![
///     WordCount::new("the", 100),
///     WordCount::new("of", 50),
///     WordCount::new("and", 33),
/// ];
///
/// let result = analyze_word_counts("demo", SourceInfo::default(), word_counts).unwrap();
/// assert_eq!(result.ranked_points()[0].word, "the");
/// assert!((result.fit_metrics().slope + 1.0).abs() < 0.05);
/// ```
pub fn analyze_word_counts(
    id: impl Into<AnalysisId>,
    source_info: SourceInfo,
    word_counts: Vec<WordCount>,
) -> Result<AnalysisResult, Error> {
    analyze_word_counts_with_custom_config(DEFAULT_ZIPF_ANALYZER_CONFIG, id, source_info, word_counts)
}

pub fn analyze_word_counts_with_custom_config(
    zipf_analyzer_config: &ZipfAnalyzerConfig,
    id: impl Into<AnalysisId>,
    source_info: SourceInfo,
    word_counts: Vec<WordCount>,
) -> Result<AnalysisResult, Error> {
    let zipf_analyzer = ZipfAnalyzer::new(zipf_analyzer_config);

    zipf_analyzer.analyze(id, source_info, word_counts)
}

/// Tokenizes `text`, counts its words and analyzes them using the default
/// configuration.
///
/// The word counts in the returned `SourceInfo` are filled in from the text.
pub fn analyze_text(
    id: impl Into<AnalysisId>,
    source_info: SourceInfo,
    text: &str,
) -> Result<AnalysisResult, Error> {
    analyze_text_with_custom_config(DEFAULT_ZIPF_ANALYZER_CONFIG, id, source_info, text)
}

pub fn analyze_text_with_custom_config(
    zipf_analyzer_config: &ZipfAnalyzerConfig,
    id: impl Into<AnalysisId>,
    source_info: SourceInfo,
    text: &str,
) -> Result<AnalysisResult, Error> {
    let aggregation = TextAggregator::new().aggregate(text);

    let source_info =
        source_info.with_word_counts(aggregation.total_word_count, aggregation.unique_word_count);

    analyze_word_counts_with_custom_config(
        zipf_analyzer_config,
        id,
        source_info,
        aggregation.word_counts,
    )
}
