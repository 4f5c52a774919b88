use crate::models::{AnalysisResult, Error, FitMetrics, RankedPoint, SourceInfo, WordCount};
use crate::types::{AnalysisId, Rank};
use crate::utils::{linear_regression, sort_word_counts};
use log::{debug, info};

pub struct ZipfAnalyzerConfig {
    /// Number of most frequent words kept in `AnalysisResult::top_words`.
    pub top_n_words: usize,
}

pub struct ZipfAnalyzer<'a> {
    config: &'a ZipfAnalyzerConfig,
}

impl<'a> ZipfAnalyzer<'a> {
    pub fn new(config: &'a ZipfAnalyzerConfig) -> Self {
        Self { config }
    }

    /// Ranks the word counts, fits a power law to them and measures how far each
    /// word strays from the ideal and fitted laws.
    ///
    /// `word_counts` must already be merged by word. Entries with a count of zero
    /// or less are kept in the raw data but excluded from the ranked points.
    pub fn analyze(
        &self,
        id: impl Into<AnalysisId>,
        source_info: SourceInfo,
        word_counts: Vec<WordCount>,
    ) -> Result<AnalysisResult, Error> {
        if word_counts.is_empty() {
            return Err(Error::NoData);
        }

        info!("Ranking word counts...");
        let sorted_word_counts = sort_word_counts(&word_counts);

        info!("Collecting log-log points...");
        let loggable: Vec<(Rank, &WordCount)> = sorted_word_counts
            .iter()
            .enumerate()
            .map(|(index, word_count)| (index + 1, word_count))
            .filter(|(_, word_count)| word_count.count > 0)
            .collect();

        if loggable.len() < 2 {
            return Err(Error::InsufficientData(loggable.len()));
        }

        let regression_points: Vec<(f64, f64)> = loggable
            .iter()
            .map(|(rank, word_count)| {
                ((*rank as f64).log10(), (word_count.count as f64).log10())
            })
            .collect();

        info!("Fitting power law...");
        let fit_metrics = linear_regression(&regression_points)
            .ok_or(Error::InsufficientData(regression_points.len()))?;

        debug!(
            "slope = {}, intercept = {}, r_squared = {}",
            fit_metrics.slope, fit_metrics.intercept, fit_metrics.r_squared
        );

        info!("Deriving divergence metrics...");
        let ranked_points = self.collect_ranked_points(&sorted_word_counts, &loggable, &fit_metrics);

        let top_words: Vec<WordCount> = sorted_word_counts
            .iter()
            .take(self.config.top_n_words)
            .cloned()
            .collect();

        Ok(AnalysisResult::new(
            id.into(),
            source_info,
            word_counts,
            ranked_points,
            fit_metrics,
            top_words,
        ))
    }

    fn collect_ranked_points(
        &self,
        sorted_word_counts: &[WordCount],
        loggable: &[(Rank, &WordCount)],
        fit_metrics: &FitMetrics,
    ) -> Vec<RankedPoint> {
        // Anchored to the observed maximum, not a theoretical constant
        let max_frequency = sorted_word_counts
            .first()
            .map_or(1, |word_count| word_count.count);

        loggable
            .iter()
            .map(|(rank, word_count)| {
                RankedPoint::new(
                    *rank,
                    word_count.word.clone(),
                    word_count.count,
                    max_frequency,
                    fit_metrics,
                )
            })
            .collect()
    }
}
