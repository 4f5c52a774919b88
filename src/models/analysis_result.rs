use crate::models::{FitMetrics, RankedPoint, SourceInfo, WordCount};
use crate::types::AnalysisId;
use serde::{Deserialize, Serialize};

/// The complete Zipf report for one set of word counts.
///
/// Fields are read through accessors only; a result never changes once the
/// analyzer has produced it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    id: AnalysisId,
    source_info: SourceInfo,
    raw_word_counts: Vec<WordCount>,
    ranked_points: Vec<RankedPoint>,
    fit_metrics: FitMetrics,
    top_words: Vec<WordCount>,
}

impl AnalysisResult {
    pub(crate) fn new(
        id: AnalysisId,
        source_info: SourceInfo,
        raw_word_counts: Vec<WordCount>,
        ranked_points: Vec<RankedPoint>,
        fit_metrics: FitMetrics,
        top_words: Vec<WordCount>,
    ) -> Self {
        Self {
            id,
            source_info,
            raw_word_counts,
            ranked_points,
            fit_metrics,
            top_words,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source_info(&self) -> &SourceInfo {
        &self.source_info
    }

    /// Word counts exactly as received: unsorted and unfiltered.
    pub fn raw_word_counts(&self) -> &[WordCount] {
        &self.raw_word_counts
    }

    /// Rank-ascending points; words with a non-positive count are absent.
    pub fn ranked_points(&self) -> &[RankedPoint] {
        &self.ranked_points
    }

    pub fn fit_metrics(&self) -> &FitMetrics {
        &self.fit_metrics
    }

    /// The most frequent words, frequency-descending.
    pub fn top_words(&self) -> &[WordCount] {
        &self.top_words
    }
}
