use serde::{Deserialize, Serialize};

/// Parameters of the least-squares line fit to `(log10(rank), log10(frequency))` pairs.
///
/// A document that follows Zipf's Law closely has a slope near `-1.0` and an
/// `r_squared` near `1.0`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FitMetrics {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl FitMetrics {
    /// Frequency predicted by the fitted power law at the given `log10(rank)`.
    pub fn fitted_frequency(&self, log_rank: f64) -> f64 {
        10f64.powf(self.slope * log_rank + self.intercept)
    }
}
