use crate::models::FitMetrics;
use crate::types::{Frequency, Rank, Word};
use serde::{Deserialize, Serialize};

/// A ranked word with its log-log coordinates and its deviation from both the
/// ideal inverse-rank law and the fitted power law.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankedPoint {
    pub rank: Rank,
    pub word: Word,
    pub actual_frequency: Frequency,
    pub log_rank: f64,
    pub log_frequency: f64,
    pub ideal_frequency: f64,
    pub fitted_frequency: f64,
    pub percent_divergence_from_ideal: f64,
    pub percent_difference_from_fitted: f64,
}

impl RankedPoint {
    /// Builds the point for `word` at `rank`.
    ///
    /// `max_frequency` is the observed count of the rank-1 word; the ideal law is
    /// anchored to it.
    pub fn new(
        rank: Rank,
        word: Word,
        actual_frequency: Frequency,
        max_frequency: Frequency,
        fit_metrics: &FitMetrics,
    ) -> Self {
        let log_rank = (rank as f64).log10();
        let log_frequency = (actual_frequency as f64).log10();

        let ideal_frequency = max_frequency as f64 / rank as f64;
        let fitted_frequency = fit_metrics.fitted_frequency(log_rank);

        Self {
            rank,
            word,
            actual_frequency,
            log_rank,
            log_frequency,
            ideal_frequency,
            fitted_frequency,
            percent_divergence_from_ideal: percent_difference(actual_frequency, ideal_frequency),
            percent_difference_from_fitted: percent_difference(actual_frequency, fitted_frequency),
        }
    }
}

/// `((actual - expected) / actual) * 100`, or `0.0` when `actual` is not positive.
fn percent_difference(actual: Frequency, expected: f64) -> f64 {
    if actual <= 0 {
        return 0.0;
    }

    let actual = actual as f64;
    ((actual - expected) / actual) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_difference_guards_non_positive_actual() {
        assert_eq!(percent_difference(0, 10.0), 0.0);
        assert_eq!(percent_difference(-3, 10.0), 0.0);
    }

    #[test]
    fn test_percent_difference_sign() {
        assert_eq!(percent_difference(50, 25.0), 50.0);
        assert_eq!(percent_difference(20, 30.0), -50.0);
    }
}
